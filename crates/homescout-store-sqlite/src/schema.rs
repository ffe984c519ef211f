//! SQL schema for the homescout SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per sellable neighborhood page. The full document lives in
-- doc_json; the scalar columns exist for indexing and the two identity
-- invariants.
CREATE TABLE IF NOT EXISTS areas (
    slug         TEXT PRIMARY KEY,
    city         TEXT NOT NULL,   -- lower-cased URL segment
    neighborhood TEXT NOT NULL,   -- lower-cased URL segment
    is_published INTEGER NOT NULL DEFAULT 0,
    doc_json     TEXT NOT NULL,
    created_at   TEXT NOT NULL,   -- ISO 8601 UTC
    updated_at   TEXT NOT NULL,
    UNIQUE (city, neighborhood)
);

CREATE TABLE IF NOT EXISTS intents (
    intent_id  TEXT PRIMARY KEY,
    is_active  INTEGER NOT NULL DEFAULT 1,
    doc_json   TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS leads (
    lead_id    TEXT PRIMARY KEY,
    email      TEXT NOT NULL,
    status     TEXT NOT NULL DEFAULT 'new',
    doc_json   TEXT NOT NULL,
    created_at TEXT NOT NULL    -- server-assigned
);

CREATE INDEX IF NOT EXISTS areas_published_idx ON areas(is_published);
CREATE INDEX IF NOT EXISTS areas_city_idx      ON areas(city);
CREATE INDEX IF NOT EXISTS leads_created_idx   ON leads(created_at);

PRAGMA user_version = 1;
";
