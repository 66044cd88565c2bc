//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Substring Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Search Works                                │
//! │                                                                         │
//! │  User types: "a"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE name LIKE '%' || 'a' || '%'                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products                                │                           │
//! │  │                                         │                           │
//! │  │ 1 | Apple  | 1.2 | 10                   │ ← MATCH (case-insensitive)│
//! │  │ 2 | Banana | 0.5 | 30                   │ ← MATCH!                  │
//! │  │ 3 | Cherry | 4.0 | 2                    │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  LIKE is case-insensitive for ASCII letters only. `%` and `_` in the   │
//! │  term keep their wildcard meaning.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{Product, ProductDraft};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&ProductDraft::new("Widget", 9.99, 5)).await?;
/// repo.update_by_id(id, &ProductDraft::new("Widget", 12.5, 3)).await?;
/// let hits = repo.search_by_name("widg").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns every product in insertion order.
    pub async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        debug!("Fetching all products");

        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id = %id, "Getting product by ID");

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// The id SQLite assigned to the new row.
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<i64> {
        debug!(name = %draft.name, price = draft.price, stock = draft.stock, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, price, stock) VALUES (?1, ?2, ?3)")
            .bind(&draft.name)
            .bind(draft.price)
            .bind(draft.stock)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!(id = %id, "Inserted product");

        Ok(id)
    }

    /// Deletes the product with the given id.
    ///
    /// ## Returns
    /// Rows removed: 1, or 0 when no such product exists. A missing id is not
    /// an error.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Overwrites name, price and stock of the product with the given id.
    ///
    /// ## Returns
    /// Rows changed: 1, or 0 when no such product exists.
    pub async fn update_by_id(&self, id: i64, draft: &ProductDraft) -> DbResult<u64> {
        debug!(id = %id, name = %draft.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                stock = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.stock)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns every product whose name contains `term`.
    ///
    /// Matching is SQLite's `LIKE`. An empty term matches everything; callers
    /// that want to refuse empty searches check before calling.
    pub async fn search_by_name(&self, term: &str) -> DbResult<Vec<Product>> {
        debug!(term = %term, "Searching products by name");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            WHERE name LIKE '%' || ?1 || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        debug!(term = %term, count = products.len(), "Search complete");
        Ok(products)
    }

    /// Counts all products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::{Product, ProductDraft};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed(db: &Database, names: &[&str]) -> Vec<i64> {
        let mut ids = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let draft = ProductDraft::new(*name, 1.5 * (i as f64 + 1.0), i as i64 * 10);
            ids.push(db.products().insert(&draft).await.unwrap());
        }
        ids
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_then_fetch_all() {
        let db = test_db().await;
        let before = seed(&db, &["Apple", "Banana"]).await;

        let id = db
            .products()
            .insert(&ProductDraft::new("Widget", 9.99, 5))
            .await
            .unwrap();

        let rows = db.products().fetch_all().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(!before.contains(&id));

        let new_rows: Vec<&Product> = rows.iter().filter(|p| p.id == id).collect();
        assert_eq!(new_rows.len(), 1);
        assert_eq!(new_rows[0].name, "Widget");
        assert_eq!(new_rows[0].price, 9.99);
        assert_eq!(new_rows[0].stock, 5);
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let db = test_db().await;
        let ids = seed(&db, &["A", "B", "C"]).await;

        assert_eq!(ids, vec![1, 2, 3]);

        let rows = db.products().fetch_all().await.unwrap();
        assert_eq!(names(&rows), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_only_that_row() {
        let db = test_db().await;
        let ids = seed(&db, &["Apple", "Banana", "Cherry"]).await;

        let removed = db.products().delete_by_id(ids[1]).await.unwrap();
        assert_eq!(removed, 1);

        let rows = db.products().fetch_all().await.unwrap();
        assert_eq!(names(&rows), vec!["Apple", "Cherry"]);
        assert!(db.products().get_by_id(ids[1]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let db = test_db().await;
        seed(&db, &["Apple", "Banana"]).await;
        let before = db.products().fetch_all().await.unwrap();

        let removed = db.products().delete_by_id(999).await.unwrap();

        assert_eq!(removed, 0);
        assert_eq!(db.products().fetch_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_by_id_changes_only_that_row() {
        let db = test_db().await;
        let ids = seed(&db, &["Apple", "Banana", "Cherry"]).await;
        let before = db.products().fetch_all().await.unwrap();

        let changed = db
            .products()
            .update_by_id(ids[0], &ProductDraft::new("Green Apple", 2.25, 7))
            .await
            .unwrap();
        assert_eq!(changed, 1);

        let after = db.products().fetch_all().await.unwrap();
        assert_eq!(
            after[0],
            Product {
                id: ids[0],
                name: "Green Apple".to_string(),
                price: 2.25,
                stock: 7,
            }
        );
        assert_eq!(after[1..], before[1..]);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let db = test_db().await;
        seed(&db, &["Apple"]).await;
        let before = db.products().fetch_all().await.unwrap();

        let changed = db
            .products()
            .update_by_id(42, &ProductDraft::new("Ghost", 0.0, 0))
            .await
            .unwrap();

        assert_eq!(changed, 0);
        assert_eq!(db.products().fetch_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_search_by_name_substring() {
        let db = test_db().await;
        seed(&db, &["Apple", "Banana", "Cherry"]).await;

        let hits = db.products().search_by_name("a").await.unwrap();

        assert_eq!(names(&hits), vec!["Apple", "Banana"]);
    }

    #[tokio::test]
    async fn test_search_matches_anywhere_in_name() {
        let db = test_db().await;
        seed(&db, &["Blue Widget", "Widget", "Gadget"]).await;

        let hits = db.products().search_by_name("WIDGET").await.unwrap();
        assert_eq!(names(&hits), vec!["Blue Widget", "Widget"]);

        let hits = db.products().search_by_name("zzz").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_keeps_like_wildcards() {
        let db = test_db().await;
        seed(&db, &["AB", "AxB", "B"]).await;

        let hits = db.products().search_by_name("A_B").await.unwrap();

        assert_eq!(names(&hits), vec!["AxB"]);
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        assert_eq!(db.products().count().await.unwrap(), 0);

        seed(&db, &["Apple", "Banana"]).await;
        assert_eq!(db.products().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_table_surfaces_query_error() {
        let db = Database::new(DbConfig::in_memory().ensure_schema(false))
            .await
            .unwrap();

        let err = db.products().fetch_all().await.unwrap_err();

        assert!(matches!(err, DbError::QueryFailed(ref msg) if msg.contains("no such table")));
    }
}
