use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the header/rows pair that mirrors a spreadsheet tab.
fn create_sheet_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheet_header (
            col_index INTEGER PRIMARY KEY,
            name      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sheet_rows (
            row_index INTEGER PRIMARY KEY,
            cells     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Stamp every row with the time of the overwrite that produced it.
fn migrate_add_written_at_column(conn: &Connection) -> Result<()> {
    let version = "20251020_0002_add_sheet_written_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "sheet_rows", "written_at")? {
        conn.execute(
            "ALTER TABLE sheet_rows ADD COLUMN written_at TEXT NOT NULL DEFAULT '';",
            [],
        )?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added written_at to sheet_rows')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; invoked every time a `SqliteSheet` is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Sheet tables (silent: `init` reports the sheet to the user)
    create_sheet_tables(conn)?;

    // 3) Incremental changes
    migrate_add_written_at_column(conn)?;

    Ok(())
}
