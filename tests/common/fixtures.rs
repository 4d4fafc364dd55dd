//! JSON bodies shaped like the CloudVault API's responses.

use serde_json::{json, Value};

pub fn user_json(id: &str, email: &str, role: &str) -> Value {
    json!({ "_id": id, "name": "Test User", "email": email, "role": role })
}

pub fn auth_json(token: &str, email: &str) -> Value {
    json!({ "token": token, "user": user_json("u-1", email, "user") })
}

pub fn file_json(id: &str, name: &str, mime: &str, size: u64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "type": mime,
        "size": size,
        "createdAt": "2024-03-01T10:30:00Z",
        "owner": { "id": "u-1", "name": "Test User", "email": "test@example.com" }
    })
}

pub fn files_page_json(files: Vec<Value>) -> Value {
    let total = files.len();
    json!({ "files": files, "total": total, "page": 1, "limit": 20 })
}
