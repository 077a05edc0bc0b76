pub const SCHEMA: &str = r#"
-- Top level of the catalog hierarchy
CREATE TABLE IF NOT EXISTS sections (
    id INTEGER PRIMARY KEY,
    title_en TEXT,
    title_ar TEXT,
    description_en TEXT,
    description_ar TEXT,
    image TEXT
);

-- Categories belong to a section. The reference is deliberately not a
-- foreign-key constraint: a category may point at a deleted section and
-- deleting a section does not cascade.
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    title_en TEXT,
    title_ar TEXT,
    description_en TEXT,
    description_ar TEXT,
    image TEXT,
    section_id INTEGER
);

-- Products belong to a category; same non-enforced reference as above.
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    title_en TEXT,
    title_ar TEXT,
    image TEXT,
    category_id INTEGER
);

CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY,
    title_en TEXT,
    title_ar TEXT,
    description_en TEXT,
    description_ar TEXT,
    image TEXT
);

-- Singleton company profile; the CHECK pins the one meaningful row
CREATE TABLE IF NOT EXISTS company (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    name_en TEXT,
    name_ar TEXT,
    about_en TEXT,
    about_ar TEXT,
    about_paragraph1_en TEXT,
    about_paragraph1_ar TEXT,
    about_paragraph2_en TEXT,
    about_paragraph2_ar TEXT,
    email TEXT,
    phone TEXT,
    address_en TEXT,
    address_ar TEXT
);

-- Single shared admin credential (SHA-256 hex digest)
CREATE TABLE IF NOT EXISTS admin_users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_categories_section ON categories(section_id);
CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id);
"#;
