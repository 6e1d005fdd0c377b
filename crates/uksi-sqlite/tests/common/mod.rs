//! Shared fixtures for SQLite integration tests

#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, Utc};
use rusqlite::{params, Connection};
use uksi_sqlite::migrate::{migrate_observations, migrate_reference};
use uksi_sqlite::{SqliteHistory, SqliteNameIndex};

pub fn add_taxon(conn: &Connection, tvk: &str, name: &str, rank: &str) {
    conn.execute(
        "INSERT INTO taxa (tvk, scientific_name, rank) VALUES (?1, ?2, ?3)",
        params![tvk, name, rank],
    )
    .unwrap();
}

pub fn add_common_name(conn: &Connection, name: &str, tvk: &str) {
    conn.execute(
        "INSERT INTO common_names (common_name, tvk) VALUES (?1, ?2)",
        params![name, tvk],
    )
    .unwrap();
}

pub fn add_synonym(conn: &Connection, synonym: &str, tvk: &str) {
    conn.execute(
        "INSERT INTO synonyms (synonym, tvk) VALUES (?1, ?2)",
        params![synonym, tvk],
    )
    .unwrap();
}

pub fn add_parent(conn: &Connection, tvk: &str, parent: Option<&str>) {
    conn.execute(
        "INSERT INTO hierarchy (tvk, parent_tvk) VALUES (?1, ?2)",
        params![tvk, parent],
    )
    .unwrap();
}

pub fn add_record(conn: &Connection, taxon_id: &str, days_ago: i64) {
    let date = (Utc::now().date_naive() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string();
    conn.execute(
        "INSERT INTO records (species_name, taxon_id, date) VALUES ('', ?1, ?2)",
        params![taxon_id, date],
    )
    .unwrap();
}

/// Blackbird and gull chains, a rose with an infraspecific duplicate,
/// and a hybrid mint.
pub fn seed_reference(conn: &Connection) {
    for (tvk, name, rank) in [
        ("K1", "Animalia", "Kingdom"),
        ("P1", "Chordata", "Phylum"),
        ("C1", "Aves", "Class"),
        ("O1", "Passeriformes", "Order"),
        ("F1", "Turdidae", "Family"),
        ("G1", "Turdus", "Genus"),
        ("S1", "Turdus merula", "Species"),
        ("S2", "Turdus philomelos", "Species"),
        ("O2", "Charadriiformes", "Order"),
        ("F2", "Laridae", "Family"),
        ("G2", "Chroicocephalus", "Genus"),
        ("S3", "Chroicocephalus ridibundus", "Species"),
        ("R1", "Rosa canina", "Species"),
        ("R2", "Rosa canina", "Subspecies"),
        ("M1", "Mentha x piperita", "Hybrid"),
        ("M2", "Mentha aquatica", "Species"),
        ("U1", "100% hybrid_name", "Species"),
    ] {
        add_taxon(conn, tvk, name, rank);
    }

    add_common_name(conn, "Blackbird", "S1");
    add_common_name(conn, "Song Thrush", "S2");
    add_common_name(conn, "Black-headed Gull", "S3");
    add_common_name(conn, "Dog-rose", "R1");
    add_common_name(conn, "Peppermint", "M1");
    add_common_name(conn, "Water Mint", "M2");
    add_synonym(conn, "Larus ridibundus", "S3");

    for (tvk, parent) in [
        ("K1", None),
        ("P1", Some("K1")),
        ("C1", Some("P1")),
        ("O1", Some("C1")),
        ("F1", Some("O1")),
        ("G1", Some("F1")),
        ("S1", Some("G1")),
        ("S2", Some("G1")),
        ("O2", Some("C1")),
        ("F2", Some("O2")),
        ("G2", Some("F2")),
        ("S3", Some("G2")),
    ] {
        add_parent(conn, tvk, parent);
    }
}

pub fn reference_index() -> SqliteNameIndex {
    let index = SqliteNameIndex::in_memory().unwrap();
    seed_reference(index.connection());
    index
}

/// Write a seeded UKSI extract to `path`.
pub fn write_reference_db(path: &Path) {
    let conn = Connection::open(path).unwrap();
    migrate_reference(&conn).unwrap();
    seed_reference(&conn);
}

/// Write an observations database to `path` with the given (taxon, days ago) records.
pub fn write_observations_db(path: &Path, records: &[(&str, i64)]) {
    let conn = Connection::open(path).unwrap();
    migrate_observations(&conn).unwrap();
    for (taxon_id, days_ago) in records {
        add_record(&conn, taxon_id, *days_ago);
    }
}

pub fn history(records: &[(&str, i64)]) -> SqliteHistory {
    let history = SqliteHistory::in_memory().unwrap();
    for (taxon_id, days_ago) in records {
        add_record(history.connection(), taxon_id, *days_ago);
    }
    history
}
