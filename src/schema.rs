diesel::table! {
    memos (id) {
        id -> Integer,
        content -> Text,
        created_at -> Text,
    }
}
