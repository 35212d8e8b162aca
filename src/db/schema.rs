pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    amount   REAL NOT NULL,
    category TEXT NOT NULL,
    type     TEXT NOT NULL,
    date     TEXT NOT NULL
);
"#;
