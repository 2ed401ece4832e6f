// src/db/query.rs

//! A small table-query client: the handful of statement shapes the
//! remote-query backend needs (select with OR'd substring filters and an
//! ordering, single-row insert, single-row update by key).

/// Unicode-aware lowercase, registered on every connection; SQLite's own
/// `lower()` only folds ASCII.
pub const LOWER_FN: &str = "unicode_lower";

#[derive(Debug, Clone)]
pub struct TableQuery<'a> {
    table: &'a str,
    columns: &'a [&'a str],
    eq: Option<(&'a str, String)>,
    or_ilike: Vec<(&'a str, String)>,
    order_desc: Option<&'a str>,
}

impl<'a> TableQuery<'a> {
    /// `select * from <table>` until narrowed.
    pub fn table(table: &'a str) -> Self {
        Self {
            table,
            columns: &[],
            eq: None,
            or_ilike: Vec::new(),
            order_desc: None,
        }
    }

    pub fn select(mut self, columns: &'a [&'a str]) -> Self {
        self.columns = columns;
        self
    }

    /// Exact match on one column (ANDed with any OR group).
    pub fn eq(mut self, column: &'a str, value: &str) -> Self {
        self.eq = Some((column, value.to_string()));
        self
    }

    /// Case-insensitive substring match of `needle` against any of `columns`.
    pub fn or_ilike(mut self, columns: &[&'a str], needle: &str) -> Self {
        let pattern = like_pattern(needle);
        self.or_ilike
            .extend(columns.iter().map(|column| (*column, pattern.clone())));
        self
    }

    /// Newest first by `column`.
    pub fn order_desc(mut self, column: &'a str) -> Self {
        self.order_desc = Some(column);
        self
    }

    /// SQL text plus positional parameters, in order.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("select {columns} from {}", self.table);
        let mut params = Vec::new();
        let mut clauses = Vec::new();

        if let Some((column, value)) = &self.eq {
            params.push(value.clone());
            clauses.push(format!("{column} = ?{}", params.len()));
        }

        if !self.or_ilike.is_empty() {
            let alternatives: Vec<String> = self
                .or_ilike
                .iter()
                .map(|(column, pattern)| {
                    params.push(pattern.clone());
                    format!("{LOWER_FN}({column}) like ?{} escape '\\'", params.len())
                })
                .collect();
            clauses.push(format!("({})", alternatives.join(" or ")));
        }

        if !clauses.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&clauses.join(" and "));
        }

        if let Some(column) = self.order_desc {
            sql.push_str(&format!(" order by {column} desc"));
        }

        (sql, params)
    }
}

/// `insert into <table> (a, b) values (?1, ?2)`
pub fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "insert into {table} ({}) values ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `update <table> set a = ?1, b = ?2 where <key> = ?3`
pub fn update_sql(table: &str, set_columns: &[&str], key_column: &str) -> String {
    let sets: Vec<String> = set_columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect();
    format!(
        "update {table} set {} where {key_column} = ?{}",
        sets.join(", "),
        set_columns.len() + 1
    )
}

/// Lowercased `%needle%` with LIKE wildcards escaped by `\`.
pub fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
