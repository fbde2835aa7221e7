///////////////////////////////////////////////////////////////////////
// Points of interest
///////////////////////////////////////////////////////////////////////

table! {
    poi (id) {
        id -> BigInt,
        name -> Text,
        alt_name -> Text,
        description -> Text,
        history -> Text,
        facts -> Text,
        lat -> Double,
        lng -> Double,
        street -> Text,
        city -> Text,
        state -> Text,
        zip -> Text,
        location_description -> Text,
        contact_name -> Text,
        website -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        story_id -> Nullable<BigInt>,
        status -> Bool,
        hours -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

table! {
    image (id) {
        id -> BigInt,
        poi_id -> BigInt,
        name -> Text,
        caption -> Text,
        file -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

joinable!(image -> poi (poi_id));

table! {
    video (id) {
        id -> BigInt,
        poi_id -> BigInt,
        name -> Text,
        caption -> Text,
        url -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

joinable!(video -> poi (poi_id));

///////////////////////////////////////////////////////////////////////
// Hazards
///////////////////////////////////////////////////////////////////////

table! {
    hazard (id) {
        id -> BigInt,
        name -> Text,
        description -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

table! {
    poi_hazard (poi_id, hazard_id) {
        poi_id -> BigInt,
        hazard_id -> BigInt,
    }
}

joinable!(poi_hazard -> poi (poi_id));
joinable!(poi_hazard -> hazard (hazard_id));

///////////////////////////////////////////////////////////////////////
// Categories
///////////////////////////////////////////////////////////////////////

table! {
    category (id) {
        id -> BigInt,
        #[sql_name = "category"]
        label -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

table! {
    poi_category (poi_id, category_id) {
        poi_id -> BigInt,
        category_id -> BigInt,
    }
}

joinable!(poi_category -> poi (poi_id));
joinable!(poi_category -> category (category_id));

///////////////////////////////////////////////////////////////////////
// Products
///////////////////////////////////////////////////////////////////////

table! {
    product (id) {
        id -> BigInt,
        name -> Text,
        variety -> Text,
        alt_name -> Text,
        description -> Text,
        origin -> Text,
        season -> Text,
        available -> Nullable<Bool>,
        market_price -> Text,
        link -> Text,
        created_at -> BigInt,
        modified_at -> BigInt,
    }
}

table! {
    preparation (id) {
        id -> BigInt,
        name -> Text,
        description -> Text,
        additional_info -> Text,
    }
}

table! {
    product_preparation (id) {
        id -> BigInt,
        product_id -> BigInt,
        preparation_id -> BigInt,
    }
}

joinable!(product_preparation -> product (product_id));
joinable!(product_preparation -> preparation (preparation_id));

table! {
    poi_product (poi_id, product_preparation_id) {
        poi_id -> BigInt,
        product_preparation_id -> BigInt,
        price -> Nullable<Double>,
        available -> Bool,
    }
}

joinable!(poi_product -> poi (poi_id));
joinable!(poi_product -> product_preparation (product_preparation_id));

allow_tables_to_appear_in_same_query!(
    poi,
    image,
    video,
    hazard,
    poi_hazard,
    category,
    poi_category,
    product,
    preparation,
    product_preparation,
    poi_product,
);
