use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::instrument;

use crate::{
    error::{Operation, ProductError, ProductResult},
    models::{CreateProduct, ProductDetail, ProductSummary, UpdateProduct},
    repository::ProductRepository,
};

const LIST_SQL: &str = "SELECT p.id, p.nama_produk, p.tahun_rilis, m.nama_merk, k.nama_kategori, p.harga \
    FROM produk p \
    LEFT JOIN merk m ON p.merk_id = m.id \
    LEFT JOIN kategori k ON p.kategori_id = k.id \
    ORDER BY p.id";

const GET_SQL: &str = "SELECT p.id, p.nama_produk, p.tahun_rilis, p.merk_id, p.kategori_id, p.harga, m.nama_merk, k.nama_kategori \
    FROM produk p \
    LEFT JOIN merk m ON p.merk_id = m.id \
    LEFT JOIN kategori k ON p.kategori_id = k.id \
    WHERE p.id = ?";

const INSERT_SQL: &str = "INSERT INTO produk (nama_produk, tahun_rilis, merk_id, kategori_id, harga) VALUES (?, ?, ?, ?, ?)";

const UPDATE_SQL: &str = "UPDATE produk SET nama_produk = ?, tahun_rilis = ?, merk_id = ?, kategori_id = ?, harga = ? WHERE id = ?";

const DELETE_SQL: &str = "DELETE FROM produk WHERE id = ?";

/// MySQL-backed product repository.
///
/// Every operation is a single parameterized statement on the shared pool.
#[derive(Debug, Clone)]
pub struct MySqlProductRepository {
    db: DatabaseConnection,
}

impl MySqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<ProductSummary>> {
        let stmt = Statement::from_string(DbBackend::MySql, LIST_SQL.to_owned());

        ProductSummary::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(ProductError::database(Operation::List))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<ProductDetail>> {
        let stmt = Statement::from_sql_and_values(DbBackend::MySql, GET_SQL, [id.into()]);

        ProductDetail::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(ProductError::database(Operation::Get))
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<u64> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::MySql,
            INSERT_SQL,
            [
                input.nama_produk.into(),
                input.tahun_rilis.into(),
                input.merk_id.into(),
                input.kategori_id.into(),
                input.harga.into(),
            ],
        );

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(ProductError::database(Operation::Create))?;

        let id = result.last_insert_id();
        tracing::info!(product_id = id, "Created product");
        Ok(id)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<bool> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::MySql,
            UPDATE_SQL,
            [
                input.nama_produk.into(),
                input.tahun_rilis.into(),
                input.merk_id.into(),
                input.kategori_id.into(),
                input.harga.into(),
                id.into(),
            ],
        );

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(ProductError::database(Operation::Update))?;

        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!(product_id = id, "Updated product");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let stmt = Statement::from_sql_and_values(DbBackend::MySql, DELETE_SQL, [id.into()]);

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(ProductError::database(Operation::Delete))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(deleted)
    }
}
