//! SQLite reference dataset implementing the NameIndex trait

use std::path::Path;

use rusqlite::{params_from_iter, Connection, OpenFlags, OptionalExtension};
use tracing::{debug, info};
use uksi_core::{
    storage::{CommonNameMap, NameIndex, NameQuery, StoreResult},
    Taxon,
};

use crate::error::{Result, SqliteError};
use crate::migrate::{migrate_reference, table_exists};

/// Tables a UKSI extract must contain
const REQUIRED_TABLES: [&str; 4] = ["taxa", "common_names", "synonyms", "hierarchy"];

/// Keys bound per `IN (...)` lookup, below SQLite's host parameter limit
const MAX_KEYS_PER_LOOKUP: usize = 500;

/// SQLite-backed UKSI reference dataset (`uksi.db`)
pub struct SqliteNameIndex {
    conn: Connection,
}

impl SqliteNameIndex {
    /// Create an index from a connection
    ///
    /// The connection should already hold the UKSI tables.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory index with an empty schema (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrate_reference(&conn)?;
        Ok(Self::new(conn))
    }

    /// Open an existing UKSI extract read-only.
    ///
    /// Fails if the file is missing or lacks one of the UKSI tables; a
    /// reference database is never created implicitly.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SqliteError::DatabaseMissing(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        for table in REQUIRED_TABLES {
            if !table_exists(&conn, table)? {
                return Err(SqliteError::MissingTable {
                    path: path.to_path_buf(),
                    table,
                });
            }
        }

        info!("Connected to UKSI database: {}", path.display());
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query_matching(&self, query: &NameQuery) -> Result<Vec<Taxon>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // (scientific LIKE w OR some common name LIKE w) AND ... for every word
        let mut clauses = Vec::with_capacity(query.words().len());
        let mut params = Vec::with_capacity(query.words().len());
        for (i, word) in query.words().iter().enumerate() {
            let n = i + 1;
            clauses.push(format!(
                "(t.scientific_name LIKE ?{n} ESCAPE '\\' \
                 OR EXISTS (SELECT 1 FROM common_names cn \
                            WHERE cn.tvk = t.tvk AND cn.common_name LIKE ?{n} ESCAPE '\\'))"
            ));
            params.push(format!("%{}%", escape_like(word)));
        }

        let sql = format!(
            "SELECT t.tvk, t.scientific_name, t.rank FROM taxa t WHERE {}",
            clauses.join(" AND ")
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let taxa = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok(Taxon {
                    taxon_key: row.get(0)?,
                    scientific_name: row.get(1)?,
                    rank: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        debug!("{} taxa match {:?}", taxa.len(), query.words());
        Ok(taxa)
    }

    fn query_common_names_bulk(&self, taxon_keys: &[String]) -> Result<CommonNameMap> {
        let mut names = CommonNameMap::new();

        for chunk in taxon_keys.chunks(MAX_KEYS_PER_LOOKUP) {
            let placeholders = vec!["?"; chunk.len()].join(",");
            let sql = format!(
                "SELECT tvk, GROUP_CONCAT(common_name, ', ') AS common_names
                 FROM common_names
                 WHERE tvk IN ({})
                 GROUP BY tvk",
                placeholders
            );

            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            for row in rows {
                let (key, joined) = row?;
                names.insert(key, joined);
            }
        }

        Ok(names)
    }

    fn query_taxon(&self, taxon_key: &str) -> Result<Option<Taxon>> {
        let taxon = self
            .conn
            .query_row(
                "SELECT tvk, scientific_name, rank FROM taxa WHERE tvk = ?",
                [taxon_key],
                |row| {
                    Ok(Taxon {
                        taxon_key: row.get(0)?,
                        scientific_name: row.get(1)?,
                        rank: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(taxon)
    }

    fn query_parent(&self, taxon_key: &str) -> Result<Option<String>> {
        let parent: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT parent_tvk FROM hierarchy WHERE tvk = ?",
                [taxon_key],
                |row| row.get(0),
            )
            .optional()?;

        // NULL and empty parent keys both mean "no parent"
        Ok(parent.flatten().filter(|p| !p.trim().is_empty()))
    }

    fn query_names(&self, sql: &str, taxon_key: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let names = stmt
            .query_map([taxon_key], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;
        Ok(names)
    }
}

/// Escape LIKE wildcards so user input is matched literally
fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl NameIndex for SqliteNameIndex {
    fn find_taxa_matching(&self, query: &NameQuery) -> StoreResult<Vec<Taxon>> {
        Ok(self.query_matching(query)?)
    }

    fn bulk_common_names(&self, taxon_keys: &[String]) -> StoreResult<CommonNameMap> {
        Ok(self.query_common_names_bulk(taxon_keys)?)
    }

    fn get_taxon(&self, taxon_key: &str) -> StoreResult<Option<Taxon>> {
        Ok(self.query_taxon(taxon_key)?)
    }

    fn get_parent(&self, taxon_key: &str) -> StoreResult<Option<String>> {
        Ok(self.query_parent(taxon_key)?)
    }

    fn common_names(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        Ok(self.query_names(
            "SELECT common_name FROM common_names WHERE tvk = ?",
            taxon_key,
        )?)
    }

    fn synonyms(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        Ok(self.query_names("SELECT synonym FROM synonyms WHERE tvk = ?", taxon_key)?)
    }
}
