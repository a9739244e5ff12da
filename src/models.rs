use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::schema::memos;

/// A stored memo. `created_at` is kept as the preformatted
/// `YYYY-MM-DD HH:MM:SS` string it was written with.
#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Memo {
    pub id: i32,
    pub content: String,
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = memos)]
pub struct NewMemo {
    pub content: String,
    pub created_at: String,
}

/// The submission form body. `content` is optional so that a request
/// without the field renders the unchanged list instead of failing
/// extraction.
#[derive(Serialize, Deserialize)]
pub struct FormParams {
    pub content: Option<String>,
}
