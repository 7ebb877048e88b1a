//! MySQL introspection through `information_schema`.

use eyre::{Context, Result, bail, eyre};
use mysql_async::{Conn, Opts, prelude::Queryable};
use table2struct_core::ColumnDescriptor;
use table2struct_mapping::DatabaseConfig;
use tokio::runtime::Runtime;
use url::Url;

use super::{RawTable, SchemaSource};

const TABLES_QUERY: &str = "SELECT TABLE_NAME FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE' \
     ORDER BY TABLE_NAME";

const TABLE_COMMENT_QUERY: &str = "SELECT TABLE_COMMENT FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?";

const COLUMNS_QUERY: &str = "SELECT COLUMN_NAME, COLUMN_TYPE, IS_NULLABLE, COLUMN_KEY, \
     COLUMN_DEFAULT, EXTRA, COLUMN_COMMENT \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

type ColumnRow = (String, String, String, String, Option<String>, String, String);

/// Build and validate the connection URL.
///
/// An explicit `url` wins; otherwise the URL is assembled from the host,
/// port, user, password and database name.
pub fn connection_url(config: &DatabaseConfig) -> Result<Url> {
    let url = match &config.url {
        Some(raw) => Url::parse(raw).wrap_err("invalid connection URL")?,
        None => {
            let Some(name) = config.name.as_deref().filter(|n| !n.is_empty()) else {
                bail!("no database name given; pass --database or set [database].name");
            };
            let mut url = Url::parse(&format!("mysql://{}", config.host))
                .wrap_err_with(|| format!("invalid database host '{}'", config.host))?;
            url.set_port(Some(config.port))
                .map_err(|_| eyre!("cannot set port on '{}'", config.host))?;
            url.set_username(&config.user)
                .map_err(|_| eyre!("cannot set user on '{}'", config.host))?;
            url.set_password(Some(&config.password))
                .map_err(|_| eyre!("cannot set password on '{}'", config.host))?;
            url.set_path(name);
            url
        }
    };

    if url.scheme() != "mysql" {
        bail!(
            "connection url does not have a `mysql` scheme; url={}",
            redact(&url)
        );
    }
    if url.host_str().is_none_or(str::is_empty) {
        bail!("missing host in connection URL; url={}", redact(&url));
    }
    if database_name(&url).is_none() {
        bail!(
            "no database specified - missing path in connection URL; url={}",
            redact(&url)
        );
    }

    Ok(url)
}

/// Schema name from the URL path, percent-decoded the way the driver reads it.
pub fn database_name(url: &Url) -> Option<String> {
    let opts = Opts::from_url(url.as_str()).ok()?;
    opts.db_name()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// The URL without its password, for display.
pub fn redact(url: &Url) -> String {
    let mut url = url.clone();
    if url.password().is_some() {
        let _ = url.set_password(Some("***"));
    }
    url.to_string()
}

fn column_from_row(row: ColumnRow) -> ColumnDescriptor {
    let (name, sql_type, is_nullable, key, default, extra, comment) = row;
    ColumnDescriptor {
        name,
        sql_type,
        nullable: is_nullable.eq_ignore_ascii_case("YES"),
        primary_key: key.eq_ignore_ascii_case("PRI"),
        auto_increment: extra.to_lowercase().contains("auto_increment"),
        default,
        comment,
    }
}

/// A blocking MySQL connection driven by a current-thread runtime.
pub struct MySqlSource {
    runtime: Runtime,
    conn: Conn,
    database: String,
}

impl MySqlSource {
    pub fn connect(url: &Url) -> Result<Self> {
        let opts = Opts::from_url(url.as_str()).wrap_err("invalid MySQL options")?;
        let database = opts
            .db_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| eyre!("no database in connection URL"))?
            .to_string();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .wrap_err("failed to start async runtime")?;

        tracing::info!(url = %redact(url), "connecting");
        let conn = runtime
            .block_on(Conn::new(opts))
            .wrap_err_with(|| format!("failed to connect to {}", redact(url)))?;

        Ok(Self {
            runtime,
            conn,
            database,
        })
    }

    /// Close the connection.
    pub fn close(self) -> Result<()> {
        self.runtime
            .block_on(self.conn.disconnect())
            .wrap_err("failed to close connection")
    }
}

impl SchemaSource for MySqlSource {
    fn database(&self) -> &str {
        &self.database
    }

    fn table_names(&mut self) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .runtime
            .block_on(self.conn.exec(TABLES_QUERY, (self.database.clone(),)))
            .wrap_err_with(|| format!("failed to list tables of '{}'", self.database))?;
        tracing::debug!(database = %self.database, count = names.len(), "listed tables");
        Ok(names)
    }

    fn table(&mut self, name: &str) -> Result<RawTable> {
        let params = (self.database.clone(), name.to_string());

        let rows: Vec<ColumnRow> = self
            .runtime
            .block_on(self.conn.exec(COLUMNS_QUERY, params.clone()))
            .wrap_err_with(|| format!("failed to read columns of '{name}'"))?;
        if rows.is_empty() {
            bail!("table not found: '{}.{}'", self.database, name);
        }

        let comment: Option<String> = self
            .runtime
            .block_on(self.conn.exec_first(TABLE_COMMENT_QUERY, params))
            .wrap_err_with(|| format!("failed to read comment of '{name}'"))?;

        tracing::debug!(table = name, columns = rows.len(), "read table");
        Ok(RawTable {
            name: name.to_string(),
            comment: comment.unwrap_or_default(),
            columns: rows.into_iter().map(column_from_row).collect(),
        })
    }
}
