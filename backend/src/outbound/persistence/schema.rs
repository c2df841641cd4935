//! Diesel table definitions matching `migrations/`.
//!
//! Keep in step with the migrations; `diesel print-schema` regenerates them
//! from a live database.

diesel::table! {
    /// Clinic clients. `address` is optional.
    clients (id) {
        id -> Int8,
        name -> Text,
        phone -> Text,
        email -> Text,
        address -> Nullable<Text>,
    }
}

diesel::table! {
    /// Veterinarians with their specialty label.
    vets (id) {
        id -> Int8,
        name -> Text,
        phone -> Text,
        email -> Text,
        specialty -> Text,
    }
}

diesel::table! {
    /// Medicines; `dose` is constrained to 1..=10.
    medicines (id) {
        id -> Int8,
        name -> Text,
        description -> Text,
        dose -> Int2,
    }
}

diesel::table! {
    /// Products sold by the clinic.
    products (id) {
        id -> Int8,
        name -> Text,
        #[sql_name = "type"]
        kind -> Text,
        price -> Float8,
    }
}

diesel::table! {
    providers (id) {
        id -> Int8,
        name -> Text,
        email -> Text,
        address -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(clients, vets, medicines, products, providers);
