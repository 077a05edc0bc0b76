use serde::{Deserialize, Serialize};

/// Top level of the catalog hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image: Option<String>,
}

/// Belongs to exactly one section. The section reference is kept even if the
/// section is later deleted; listings may show orphaned categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    pub section_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image: Option<String>,
}

/// Singleton company profile. At most one row (id = 1) is ever stored;
/// [`Company::default_profile`] is surfaced when the table is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub about_en: Option<String>,
    pub about_ar: Option<String>,
    pub about_paragraph1_en: Option<String>,
    pub about_paragraph1_ar: Option<String>,
    pub about_paragraph2_en: Option<String>,
    pub about_paragraph2_ar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_en: Option<String>,
    pub address_ar: Option<String>,
}

impl Company {
    /// Built-in bilingual profile returned while no row has been saved yet.
    #[must_use]
    pub fn default_profile() -> Self {
        Self {
            id: 1,
            name_en: Some("Bayaddrr".to_string()),
            name_ar: Some("البيادر".to_string()),
            about_en: Some(
                "Leading the way in sustainable agriculture with innovative solutions for modern farming."
                    .to_string(),
            ),
            about_ar: Some(
                "نقود الطريق نحو الزراعة المستدامة بحلول مبتكرة للزراعة الحديثة.".to_string(),
            ),
            about_paragraph1_en: Some(
                "Bayaddrr is a leading agricultural company dedicated to providing innovative solutions for modern farming. With years of experience in the industry, we understand the challenges faced by farmers and offer comprehensive solutions to enhance productivity and sustainability."
                    .to_string(),
            ),
            about_paragraph1_ar: Some(
                "البيادر هي شركة زراعية رائدة مكرسة لتقديم حلول مبتكرة للزراعة الحديثة. مع سنوات من الخبرة في الصناعة، نفهم التحديات التي يواجهها المزارعون ونقدم حلولاً شاملة لتعزيز الإنتاجية والاستدامة."
                    .to_string(),
            ),
            about_paragraph2_en: Some(
                "Our team of experts combines traditional farming knowledge with cutting-edge technology to deliver results that exceed expectations. We believe in building long-term relationships with our clients and supporting them throughout their agricultural journey."
                    .to_string(),
            ),
            about_paragraph2_ar: Some(
                "يجمع فريقنا من الخبراء بين المعرفة الزراعية التقنية والتكنولوجيا المتطورة لتقديم نتائج تتجاوز التوقعات. نؤمن بإقامة علاقات طويلة الأمد مع عملائنا ودعمهم طوال رحلتهم الزراعية."
                    .to_string(),
            ),
            email: Some("info@bayadder.com".to_string()),
            phone: Some("+218 91-0029409".to_string()),
            address_en: Some("Libya / Tripoli / Alnoufliyen".to_string()),
            address_ar: Some("ليبيا / طرابلس / النوفليين".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Writable fields for a section row. Absent values overwrite with NULL on
/// replace (full-replace semantics); `image` is handled separately.
#[derive(Debug, Clone, Default)]
pub struct SectionFields {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryFields {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub section_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceFields {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyFields {
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub about_en: Option<String>,
    #[serde(default)]
    pub about_ar: Option<String>,
    #[serde(default)]
    pub about_paragraph1_en: Option<String>,
    #[serde(default)]
    pub about_paragraph1_ar: Option<String>,
    #[serde(default)]
    pub about_paragraph2_en: Option<String>,
    #[serde(default)]
    pub about_paragraph2_ar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address_en: Option<String>,
    #[serde(default)]
    pub address_ar: Option<String>,
}
