mod common;

use reqwest::multipart;
use serde_json::Value;

fn png_part(bytes: &[u8], filename: &str) -> multipart::Part {
    multipart::Part::bytes(bytes.to_vec())
        .file_name(filename.to_string())
        .mime_str("image/png")
        .expect("build file part")
}

#[tokio::test]
async fn test_section_crud_lifecycle() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    // Create without an image
    let resp = client
        .post(format!("{}/api/sections", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Irrigation")
                .text("description_en", "Irrigation systems"),
        )
        .send()
        .await
        .expect("create section");
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.expect("parse created section");
    assert_eq!(created["title_en"], "Irrigation");
    assert!(created["image"].is_null());
    let id = created["id"].as_i64().expect("section id");

    // Get returns the same row
    let fetched: Value = client
        .get(format!("{}/api/sections/{}", server.base_url, id))
        .send()
        .await
        .expect("get section")
        .json()
        .await
        .expect("parse section");
    assert_eq!(fetched, created);

    // Replace with only an image: titles go empty, image gets set
    let resp = client
        .put(format!("{}/api/sections/{}", server.base_url, id))
        .multipart(
            multipart::Form::new()
                .text("title_en", "")
                .part("image", png_part(b"fake-png", "photo.png")),
        )
        .send()
        .await
        .expect("update section");
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.expect("parse updated section");
    assert_eq!(updated["id"], id);
    assert!(
        updated["title_en"]
            .as_str()
            .map_or(true, |s| s.is_empty()),
        "full replace clears the title"
    );
    let image = updated["image"].as_str().expect("image reference");
    assert!(image.starts_with("/uploads/"));
    assert!(updated["description_en"].is_null());

    // Delete, then the row is gone
    let resp = client
        .delete(format!("{}/api/sections/{}", server.base_url, id))
        .send()
        .await
        .expect("delete section");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse delete response");
    assert_eq!(body["success"], true);

    let resp = client
        .get(format!("{}/api/sections/{}", server.base_url, id))
        .send()
        .await
        .expect("get deleted section");
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Section not found");
}

#[tokio::test]
async fn test_list_sections_ascending_ids() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    for title in ["alpha", "beta", "gamma"] {
        let resp = client
            .post(format!("{}/api/sections", server.base_url))
            .multipart(multipart::Form::new().text("title_en", title.to_string()))
            .send()
            .await
            .expect("create section");
        assert_eq!(resp.status(), 201);
    }

    let sections: Vec<Value> = client
        .get(format!("{}/api/sections", server.base_url))
        .send()
        .await
        .expect("list sections")
        .json()
        .await
        .expect("parse sections");
    assert_eq!(sections.len(), 3);
    let ids: Vec<i64> = sections
        .iter()
        .map(|s| s["id"].as_i64().expect("id"))
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_invalid_and_missing_ids() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/products/abc", server.base_url))
        .send()
        .await
        .expect("get with bad id");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Invalid ID");

    let resp = client
        .get(format!("{}/api/products/999999", server.base_url))
        .send()
        .await
        .expect("get missing product");
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_create_validation() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    // Both titles missing
    let resp = client
        .post(format!("{}/api/sections", server.base_url))
        .multipart(multipart::Form::new().text("description_en", "no titles"))
        .send()
        .await
        .expect("create without title");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Title is required");

    // Empty titles count as missing
    let resp = client
        .post(format!("{}/api/services", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "")
                .text("title_ar", ""),
        )
        .send()
        .await
        .expect("create with empty titles");
    assert_eq!(resp.status(), 400);

    // Category without its parent id
    let resp = client
        .post(format!("{}/api/categories", server.base_url))
        .multipart(multipart::Form::new().text("title_en", "Pumps"))
        .send()
        .await
        .expect("create category without section");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Section ID is required");

    // Product without its parent id
    let resp = client
        .post(format!("{}/api/products", server.base_url))
        .multipart(multipart::Form::new().text("title_en", "Drip line"))
        .send()
        .await
        .expect("create product without category");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Category ID is required");
}

#[tokio::test]
async fn test_dangling_section_reference_is_accepted() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/sections", server.base_url))
        .multipart(multipart::Form::new().text("title_en", "Doomed"))
        .send()
        .await
        .expect("create section")
        .json()
        .await
        .expect("parse section");
    let section_id = created["id"].as_i64().expect("section id");

    let resp = client
        .delete(format!("{}/api/sections/{}", server.base_url, section_id))
        .send()
        .await
        .expect("delete section");
    assert_eq!(resp.status(), 200);

    // Documented lenient behavior: the parent's existence is not verified,
    // so a category referencing the deleted section is accepted.
    let resp = client
        .post(format!("{}/api/categories", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Orphan")
                .text("section_id", section_id.to_string()),
        )
        .send()
        .await
        .expect("create category");
    assert_eq!(resp.status(), 201);
    let category: Value = resp.json().await.expect("parse category");
    assert_eq!(category["section_id"], section_id);

    let listed: Vec<Value> = client
        .get(format!("{}/api/categories", server.base_url))
        .send()
        .await
        .expect("list categories")
        .json()
        .await
        .expect("parse categories");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_product_crud_under_category() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let section: Value = client
        .post(format!("{}/api/sections", server.base_url))
        .multipart(multipart::Form::new().text("title_en", "Equipment"))
        .send()
        .await
        .expect("create section")
        .json()
        .await
        .expect("parse section");

    let category: Value = client
        .post(format!("{}/api/categories", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Pumps")
                .text("section_id", section["id"].to_string()),
        )
        .send()
        .await
        .expect("create category")
        .json()
        .await
        .expect("parse category");
    let category_id = category["id"].as_i64().expect("category id");

    let resp = client
        .post(format!("{}/api/products", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Submersible pump")
                .text("title_ar", "مضخة غاطسة")
                .text("category_id", category_id.to_string()),
        )
        .send()
        .await
        .expect("create product");
    assert_eq!(resp.status(), 201);
    let product: Value = resp.json().await.expect("parse product");
    let product_id = product["id"].as_i64().expect("product id");
    assert_eq!(product["category_id"], category_id);

    let resp = client
        .put(format!("{}/api/products/{}", server.base_url, product_id))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Surface pump")
                .text("category_id", category_id.to_string()),
        )
        .send()
        .await
        .expect("update product");
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.expect("parse updated product");
    assert_eq!(updated["title_en"], "Surface pump");
    assert!(updated["title_ar"].is_null(), "full replace clears title_ar");

    let resp = client
        .delete(format!("{}/api/products/{}", server.base_url, product_id))
        .send()
        .await
        .expect("delete product");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse delete response");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_replace_preserves_image_without_new_upload() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/services", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Soil analysis")
                .part("image", png_part(b"original-bytes", "soil.png")),
        )
        .send()
        .await
        .expect("create service")
        .json()
        .await
        .expect("parse service");
    let id = created["id"].as_i64().expect("service id");
    let original_image = created["image"].as_str().expect("image").to_string();

    // No file part: the prior reference is carried over verbatim
    let updated: Value = client
        .put(format!("{}/api/services/{}", server.base_url, id))
        .multipart(multipart::Form::new().text("title_en", "Soil testing"))
        .send()
        .await
        .expect("update service")
        .json()
        .await
        .expect("parse updated service");
    assert_eq!(updated["image"], original_image.as_str());
    assert_eq!(updated["title_en"], "Soil testing");

    // A new file yields a distinct reference
    let replaced: Value = client
        .put(format!("{}/api/services/{}", server.base_url, id))
        .multipart(
            multipart::Form::new()
                .text("title_en", "Soil testing")
                .part("image", png_part(b"new-bytes", "soil2.png")),
        )
        .send()
        .await
        .expect("replace image")
        .json()
        .await
        .expect("parse service");
    let new_image = replaced["image"].as_str().expect("image");
    assert_ne!(new_image, original_image);
    assert!(new_image.starts_with("/uploads/"));
}

#[tokio::test]
async fn test_uploaded_image_is_served_back() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/sections", server.base_url))
        .multipart(
            multipart::Form::new()
                .text("title_ar", "الري")
                .part("image", png_part(b"served-bytes", "field.png")),
        )
        .send()
        .await
        .expect("create section")
        .json()
        .await
        .expect("parse section");
    let reference = created["image"].as_str().expect("image reference");

    // The reference resolves as static content
    let resp = client
        .get(format!("{}{}", server.base_url, reference))
        .send()
        .await
        .expect("fetch upload");
    assert_eq!(resp.status(), 200);
    let bytes = resp.bytes().await.expect("read upload");
    assert_eq!(&bytes[..], b"served-bytes");

    // And the file landed in the uploads directory on disk
    let filename = reference.strip_prefix("/uploads/").expect("relative ref");
    assert!(server.data_dir().join("uploads").join(filename).exists());
}

#[tokio::test]
async fn test_company_default_then_upsert() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    // Empty table surfaces the built-in bilingual default, never a 404
    let resp = client
        .get(format!("{}/api/company", server.base_url))
        .send()
        .await
        .expect("get company");
    assert_eq!(resp.status(), 200);
    let default: Value = resp.json().await.expect("parse company");
    assert_eq!(default["id"], 1);
    assert_eq!(default["name_en"], "Bayaddrr");
    assert_eq!(default["name_ar"], "البيادر");

    // First upsert creates the row
    let first: Value = client
        .put(format!("{}/api/company", server.base_url))
        .json(&serde_json::json!({
            "name_en": "Green Fields",
            "name_ar": "الحقول الخضراء",
            "email": "hello@greenfields.example",
            "phone": "+218 91-0000000"
        }))
        .send()
        .await
        .expect("upsert company")
        .json()
        .await
        .expect("parse company");
    let first_id = first["id"].as_i64().expect("company id");
    assert_eq!(first["name_en"], "Green Fields");

    // Second upsert updates the same row; absent fields overwrite with null
    let second: Value = client
        .put(format!("{}/api/company", server.base_url))
        .json(&serde_json::json!({ "name_en": "Greener Fields" }))
        .send()
        .await
        .expect("upsert company again")
        .json()
        .await
        .expect("parse company");
    assert_eq!(second["id"].as_i64(), Some(first_id));
    assert_eq!(second["name_en"], "Greener Fields");
    assert!(second["email"].is_null());

    let stored: Value = client
        .get(format!("{}/api/company", server.base_url))
        .send()
        .await
        .expect("get company")
        .json()
        .await
        .expect("parse company");
    assert_eq!(stored["name_en"], "Greener Fields");
}

#[tokio::test]
async fn test_login_and_change_password() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({"username": "admin", "password": "wrong"}))
        .send()
        .await
        .expect("login with wrong password");
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["error"], "Invalid username or password");

    let resp = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({"username": "admin"}))
        .send()
        .await
        .expect("login without password");
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({
            "username": "admin",
            "password": server.admin_password
        }))
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse login response");
    assert_eq!(body["success"], true);

    let resp = client
        .post(format!("{}/api/change-password", server.base_url))
        .json(&serde_json::json!({
            "username": "admin",
            "currentPassword": "wrong",
            "newPassword": "next-password"
        }))
        .send()
        .await
        .expect("change password with wrong current");
    assert_eq!(resp.status(), 401);

    let resp = client
        .post(format!("{}/api/change-password", server.base_url))
        .json(&serde_json::json!({
            "username": "admin",
            "currentPassword": server.admin_password,
            "newPassword": "next-password"
        }))
        .send()
        .await
        .expect("change password");
    assert_eq!(resp.status(), 200);

    // Old credential is dead, the new one works
    let resp = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({
            "username": "admin",
            "password": server.admin_password
        }))
        .send()
        .await
        .expect("login with old password");
    assert_eq!(resp.status(), 401);

    let resp = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({"username": "admin", "password": "next-password"}))
        .send()
        .await
        .expect("login with new password");
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_contact_form() {
    let server = common::TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/contact", server.base_url))
        .json(&serde_json::json!({"fullName": "Jo", "email": "jo@example.com"}))
        .send()
        .await
        .expect("contact without message");
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("parse error");
    assert_eq!(body["success"], false);

    let resp = client
        .post(format!("{}/api/contact", server.base_url))
        .json(&serde_json::json!({
            "fullName": "Jo Farmer",
            "email": "jo@example.com",
            "company": "Farm Co",
            "message": "Interested in drip irrigation."
        }))
        .send()
        .await
        .expect("submit contact");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("parse response");
    assert_eq!(body["success"], true);
}
