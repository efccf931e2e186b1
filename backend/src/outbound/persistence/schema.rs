//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Registered accounts keyed by normalised username.
    users (username) {
        username -> Varchar,
        /// PHC-formatted Argon2 hash.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Inventory records, each owned by one user.
    items (id) {
        id -> Uuid,
        owner -> Varchar,
        name -> Text,
        sku -> Text,
        category -> Text,
        quantity -> Int8,
        price -> Float8,
        supplier -> Text,
        location -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(items -> users (owner));
diesel::allow_tables_to_appear_in_same_query!(items, users);
