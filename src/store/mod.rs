mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// `replace_*` operations overwrite every data field with the supplied value,
/// including overwriting present values with NULL. The `image` argument is
/// the final resolved reference; carry-over of the prior image when no new
/// upload arrived is the endpoint layer's job.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Section operations
    fn list_sections(&self) -> Result<Vec<Section>>;
    fn get_section(&self, id: i64) -> Result<Option<Section>>;
    fn create_section(&self, fields: &SectionFields, image: Option<&str>) -> Result<Section>;
    fn replace_section(
        &self,
        id: i64,
        fields: &SectionFields,
        image: Option<&str>,
    ) -> Result<Section>;
    fn delete_section(&self, id: i64) -> Result<bool>;

    // Category operations
    fn list_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, id: i64) -> Result<Option<Category>>;
    fn create_category(&self, fields: &CategoryFields, image: Option<&str>) -> Result<Category>;
    fn replace_category(
        &self,
        id: i64,
        fields: &CategoryFields,
        image: Option<&str>,
    ) -> Result<Category>;
    fn delete_category(&self, id: i64) -> Result<bool>;

    // Product operations
    fn list_products(&self) -> Result<Vec<Product>>;
    fn get_product(&self, id: i64) -> Result<Option<Product>>;
    fn create_product(&self, fields: &ProductFields, image: Option<&str>) -> Result<Product>;
    fn replace_product(
        &self,
        id: i64,
        fields: &ProductFields,
        image: Option<&str>,
    ) -> Result<Product>;
    fn delete_product(&self, id: i64) -> Result<bool>;

    // Service operations
    fn list_services(&self) -> Result<Vec<Service>>;
    fn get_service(&self, id: i64) -> Result<Option<Service>>;
    fn create_service(&self, fields: &ServiceFields, image: Option<&str>) -> Result<Service>;
    fn replace_service(
        &self,
        id: i64,
        fields: &ServiceFields,
        image: Option<&str>,
    ) -> Result<Service>;
    fn delete_service(&self, id: i64) -> Result<bool>;

    // Company profile (singleton, no delete)
    fn get_company(&self) -> Result<Option<Company>>;
    /// Atomic check-and-set against the single-row table; creates the row
    /// when absent, otherwise overwrites it, in one statement.
    fn upsert_company(&self, fields: &CompanyFields) -> Result<Company>;

    // Admin credential operations
    fn create_admin_user(&self, username: &str, password_hash: &str) -> Result<()>;
    fn get_admin_user(&self, username: &str) -> Result<Option<AdminUser>>;
    fn set_admin_password(&self, username: &str, password_hash: &str) -> Result<()>;
    fn has_admin_user(&self) -> Result<bool>;
}
