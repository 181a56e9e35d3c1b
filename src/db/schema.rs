pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    owner       TEXT NOT NULL,
    title       TEXT NOT NULL,
    amount      TEXT NOT NULL,
    occurred_on TEXT NOT NULL,
    category    TEXT NOT NULL,
    recurring   BOOLEAN NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_expenses_owner ON expenses(owner);
CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(occurred_on);

CREATE TABLE IF NOT EXISTS budgets (
    owner   TEXT PRIMARY KEY,
    overall TEXT NOT NULL DEFAULT '0'
);

CREATE TABLE IF NOT EXISTS category_budgets (
    owner    TEXT NOT NULL,
    category TEXT NOT NULL,
    amount   TEXT NOT NULL,
    PRIMARY KEY (owner, category)
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;
