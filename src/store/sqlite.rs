use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn section_from_row(row: &Row<'_>) -> rusqlite::Result<Section> {
    Ok(Section {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        description_en: row.get(3)?,
        description_ar: row.get(4)?,
        image: row.get(5)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        description_en: row.get(3)?,
        description_ar: row.get(4)?,
        image: row.get(5)?,
        section_id: row.get(6)?,
    })
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        image: row.get(3)?,
        category_id: row.get(4)?,
    })
}

fn service_from_row(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        title_en: row.get(1)?,
        title_ar: row.get(2)?,
        description_en: row.get(3)?,
        description_ar: row.get(4)?,
        image: row.get(5)?,
    })
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    Ok(Company {
        id: row.get(0)?,
        name_en: row.get(1)?,
        name_ar: row.get(2)?,
        about_en: row.get(3)?,
        about_ar: row.get(4)?,
        about_paragraph1_en: row.get(5)?,
        about_paragraph1_ar: row.get(6)?,
        about_paragraph2_en: row.get(7)?,
        about_paragraph2_ar: row.get(8)?,
        email: row.get(9)?,
        phone: row.get(10)?,
        address_en: row.get(11)?,
        address_ar: row.get(12)?,
    })
}

const SECTION_COLS: &str = "id, title_en, title_ar, description_en, description_ar, image";
const CATEGORY_COLS: &str =
    "id, title_en, title_ar, description_en, description_ar, image, section_id";
const PRODUCT_COLS: &str = "id, title_en, title_ar, image, category_id";
const SERVICE_COLS: &str = "id, title_en, title_ar, description_en, description_ar, image";
const COMPANY_COLS: &str = "id, name_en, name_ar, about_en, about_ar, \
     about_paragraph1_en, about_paragraph1_ar, about_paragraph2_en, about_paragraph2_ar, \
     email, phone, address_en, address_ar";

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Section operations

    fn list_sections(&self) -> Result<Vec<Section>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {SECTION_COLS} FROM sections ORDER BY id"))?;
        let rows = stmt.query_map([], section_from_row)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_section(&self, id: i64) -> Result<Option<Section>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {SECTION_COLS} FROM sections WHERE id = ?1"),
            params![id],
            section_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_section(&self, fields: &SectionFields, image: Option<&str>) -> Result<Section> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO sections (title_en, title_ar, description_en, description_ar, image)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
            ],
        )?;
        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {SECTION_COLS} FROM sections WHERE id = ?1"),
            params![id],
            section_from_row,
        )
        .map_err(Error::from)
    }

    fn replace_section(
        &self,
        id: i64,
        fields: &SectionFields,
        image: Option<&str>,
    ) -> Result<Section> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE sections SET title_en = ?1, title_ar = ?2, description_en = ?3,
             description_ar = ?4, image = ?5 WHERE id = ?6",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
                id,
            ],
        )?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        conn.query_row(
            &format!("SELECT {SECTION_COLS} FROM sections WHERE id = ?1"),
            params![id],
            section_from_row,
        )
        .map_err(Error::from)
    }

    fn delete_section(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM sections WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Category operations

    fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {CATEGORY_COLS} FROM categories ORDER BY id"))?;
        let rows = stmt.query_map([], category_from_row)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_category(&self, id: i64) -> Result<Option<Category>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {CATEGORY_COLS} FROM categories WHERE id = ?1"),
            params![id],
            category_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_category(&self, fields: &CategoryFields, image: Option<&str>) -> Result<Category> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO categories (title_en, title_ar, description_en, description_ar, image, section_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
                fields.section_id,
            ],
        )?;
        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {CATEGORY_COLS} FROM categories WHERE id = ?1"),
            params![id],
            category_from_row,
        )
        .map_err(Error::from)
    }

    fn replace_category(
        &self,
        id: i64,
        fields: &CategoryFields,
        image: Option<&str>,
    ) -> Result<Category> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE categories SET title_en = ?1, title_ar = ?2, description_en = ?3,
             description_ar = ?4, image = ?5, section_id = ?6 WHERE id = ?7",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
                fields.section_id,
                id,
            ],
        )?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        conn.query_row(
            &format!("SELECT {CATEGORY_COLS} FROM categories WHERE id = ?1"),
            params![id],
            category_from_row,
        )
        .map_err(Error::from)
    }

    fn delete_category(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM categories WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Product operations

    fn list_products(&self) -> Result<Vec<Product>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {PRODUCT_COLS} FROM products ORDER BY id"))?;
        let rows = stmt.query_map([], product_from_row)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_product(&self, id: i64) -> Result<Option<Product>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {PRODUCT_COLS} FROM products WHERE id = ?1"),
            params![id],
            product_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_product(&self, fields: &ProductFields, image: Option<&str>) -> Result<Product> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO products (title_en, title_ar, image, category_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![fields.title_en, fields.title_ar, image, fields.category_id],
        )?;
        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {PRODUCT_COLS} FROM products WHERE id = ?1"),
            params![id],
            product_from_row,
        )
        .map_err(Error::from)
    }

    fn replace_product(
        &self,
        id: i64,
        fields: &ProductFields,
        image: Option<&str>,
    ) -> Result<Product> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE products SET title_en = ?1, title_ar = ?2, image = ?3, category_id = ?4
             WHERE id = ?5",
            params![fields.title_en, fields.title_ar, image, fields.category_id, id],
        )?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        conn.query_row(
            &format!("SELECT {PRODUCT_COLS} FROM products WHERE id = ?1"),
            params![id],
            product_from_row,
        )
        .map_err(Error::from)
    }

    fn delete_product(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Service operations

    fn list_services(&self) -> Result<Vec<Service>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {SERVICE_COLS} FROM services ORDER BY id"))?;
        let rows = stmt.query_map([], service_from_row)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_service(&self, id: i64) -> Result<Option<Service>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {SERVICE_COLS} FROM services WHERE id = ?1"),
            params![id],
            service_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_service(&self, fields: &ServiceFields, image: Option<&str>) -> Result<Service> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO services (title_en, title_ar, description_en, description_ar, image)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
            ],
        )?;
        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {SERVICE_COLS} FROM services WHERE id = ?1"),
            params![id],
            service_from_row,
        )
        .map_err(Error::from)
    }

    fn replace_service(
        &self,
        id: i64,
        fields: &ServiceFields,
        image: Option<&str>,
    ) -> Result<Service> {
        let conn = self.conn();
        let rows = conn.execute(
            "UPDATE services SET title_en = ?1, title_ar = ?2, description_en = ?3,
             description_ar = ?4, image = ?5 WHERE id = ?6",
            params![
                fields.title_en,
                fields.title_ar,
                fields.description_en,
                fields.description_ar,
                image,
                id,
            ],
        )?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        conn.query_row(
            &format!("SELECT {SERVICE_COLS} FROM services WHERE id = ?1"),
            params![id],
            service_from_row,
        )
        .map_err(Error::from)
    }

    fn delete_service(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM services WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Company profile

    fn get_company(&self) -> Result<Option<Company>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {COMPANY_COLS} FROM company ORDER BY id LIMIT 1"),
            [],
            company_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn upsert_company(&self, fields: &CompanyFields) -> Result<Company> {
        let conn = self.conn();
        // Single-statement check-and-set against the fixed-id row, so two
        // concurrent upserts cannot both attempt creation.
        conn.execute(
            "INSERT INTO company (id, name_en, name_ar, about_en, about_ar,
                 about_paragraph1_en, about_paragraph1_ar, about_paragraph2_en, about_paragraph2_ar,
                 email, phone, address_en, address_ar)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT(id) DO UPDATE SET
                 name_en = excluded.name_en,
                 name_ar = excluded.name_ar,
                 about_en = excluded.about_en,
                 about_ar = excluded.about_ar,
                 about_paragraph1_en = excluded.about_paragraph1_en,
                 about_paragraph1_ar = excluded.about_paragraph1_ar,
                 about_paragraph2_en = excluded.about_paragraph2_en,
                 about_paragraph2_ar = excluded.about_paragraph2_ar,
                 email = excluded.email,
                 phone = excluded.phone,
                 address_en = excluded.address_en,
                 address_ar = excluded.address_ar",
            params![
                fields.name_en,
                fields.name_ar,
                fields.about_en,
                fields.about_ar,
                fields.about_paragraph1_en,
                fields.about_paragraph1_ar,
                fields.about_paragraph2_en,
                fields.about_paragraph2_ar,
                fields.email,
                fields.phone,
                fields.address_en,
                fields.address_ar,
            ],
        )?;
        conn.query_row(
            &format!("SELECT {COMPANY_COLS} FROM company WHERE id = 1"),
            [],
            company_from_row,
        )
        .map_err(Error::from)
    }

    // Admin credential operations

    fn create_admin_user(&self, username: &str, password_hash: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO admin_users (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;
        Ok(())
    }

    fn get_admin_user(&self, username: &str) -> Result<Option<AdminUser>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, username, password_hash FROM admin_users WHERE username = ?1",
            params![username],
            |row| {
                Ok(AdminUser {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    fn set_admin_password(&self, username: &str, password_hash: &str) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE admin_users SET password_hash = ?1 WHERE username = ?2",
            params![password_hash, username],
        )?;
        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn has_admin_user(&self) -> Result<bool> {
        let conn = self.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM admin_users", [], |row| row.get(0))?;
        Ok(count > 0)
    }
}
