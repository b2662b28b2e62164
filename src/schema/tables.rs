// src/schema/tables.rs
//
// The full Olist schema: one spec per CSV export. Load order matches
// declaration order but nothing depends on it; FK-like columns are plain
// TEXT and every CREATE runs before any load.

use crate::error::RegistryError;

use super::types::{Registry, TableSpec};

pub const SPECS: &[TableSpec] = &[
    TableSpec {
        name: "olist_customers",
        source_file: "olist_customers_dataset.csv",
        create: "
            CREATE TABLE olist_customers (
                customer_id TEXT PRIMARY KEY,
                customer_unique_id TEXT,
                customer_zip_code_prefix TEXT,
                customer_city TEXT,
                customer_state TEXT
            );
        ",
        date_columns: &[],
        primary_key: Some("customer_id"),
    },
    TableSpec {
        name: "olist_geolocation",
        source_file: "olist_geolocation_dataset.csv",
        create: "
            CREATE TABLE olist_geolocation (
                geolocation_zip_code_prefix TEXT,
                geolocation_lat FLOAT,
                geolocation_lng FLOAT,
                geolocation_city TEXT,
                geolocation_state TEXT
            );
        ",
        date_columns: &[],
        primary_key: None,
    },
    TableSpec {
        name: "olist_order_items",
        source_file: "olist_order_items_dataset.csv",
        create: "
            CREATE TABLE olist_order_items (
                order_id TEXT,
                order_item_id INTEGER,
                product_id TEXT,
                seller_id TEXT,
                shipping_limit_date TIMESTAMP,
                price NUMERIC,
                freight_value NUMERIC,
                PRIMARY KEY (order_id, order_item_id)
            );
        ",
        date_columns: &["shipping_limit_date"],
        primary_key: None,
    },
    TableSpec {
        name: "olist_orders",
        source_file: "olist_orders_dataset.csv",
        create: "
            CREATE TABLE olist_orders (
                order_id TEXT PRIMARY KEY,
                customer_id TEXT,
                order_status TEXT,
                order_purchase_timestamp TIMESTAMP,
                order_approved_at TIMESTAMP,
                order_delivered_carrier_date TIMESTAMP,
                order_delivered_customer_date TIMESTAMP,
                order_estimated_delivery_date TIMESTAMP
            );
        ",
        date_columns: &[
            "order_purchase_timestamp",
            "order_approved_at",
            "order_delivered_carrier_date",
            "order_delivered_customer_date",
            "order_estimated_delivery_date",
        ],
        primary_key: Some("order_id"),
    },
    TableSpec {
        name: "olist_order_payments",
        source_file: "olist_order_payments_dataset.csv",
        create: "
            CREATE TABLE olist_order_payments (
                order_id TEXT,
                payment_sequential INTEGER,
                payment_type TEXT,
                payment_installments INTEGER,
                payment_value NUMERIC
            );
        ",
        date_columns: &[],
        primary_key: None,
    },
    TableSpec {
        name: "olist_order_reviews",
        source_file: "olist_order_reviews_dataset.csv",
        create: "
            CREATE TABLE olist_order_reviews (
                review_id TEXT PRIMARY KEY,
                order_id TEXT,
                review_score INTEGER,
                review_comment_title TEXT,
                review_comment_message TEXT,
                review_creation_date DATE,
                review_answer_timestamp TIMESTAMP
            );
        ",
        date_columns: &["review_creation_date", "review_answer_timestamp"],
        primary_key: Some("review_id"),
    },
    TableSpec {
        name: "olist_products",
        source_file: "olist_products_dataset.csv",
        create: "
            CREATE TABLE olist_products (
                product_id TEXT PRIMARY KEY,
                product_category_name TEXT,
                product_name_length INTEGER,
                product_description_lenght INTEGER,
                product_photos_qty INTEGER,
                product_weight_g INTEGER,
                product_length_cm INTEGER,
                product_height_cm INTEGER,
                product_width_cm INTEGER
            );
        ",
        date_columns: &[],
        primary_key: Some("product_id"),
    },
    TableSpec {
        name: "olist_sellers",
        source_file: "olist_sellers_dataset.csv",
        create: "
            CREATE TABLE olist_sellers (
                seller_id TEXT PRIMARY KEY,
                seller_zip_code_prefix TEXT,
                seller_city TEXT,
                seller_state TEXT
            );
        ",
        date_columns: &[],
        primary_key: Some("seller_id"),
    },
    TableSpec {
        name: "product_category_name_translation",
        source_file: "product_category_name_translation.csv",
        create: "
            CREATE TABLE product_category_name_translation (
                product_category_name TEXT PRIMARY KEY,
                product_category_name_english TEXT
            );
        ",
        date_columns: &[],
        primary_key: Some("product_category_name"),
    },
    TableSpec {
        name: "olist_marketing_qualified_leads",
        source_file: "olist_marketing_qualified_leads_dataset.csv",
        create: "
            CREATE TABLE olist_marketing_qualified_leads (
                mql_id TEXT PRIMARY KEY,
                first_contact_date DATE,
                landing_page_id TEXT,
                origin TEXT
            );
        ",
        date_columns: &["first_contact_date"],
        primary_key: Some("mql_id"),
    },
    TableSpec {
        name: "olist_closed_deals",
        source_file: "olist_closed_deals_dataset.csv",
        create: "
            CREATE TABLE olist_closed_deals (
                mql_id TEXT PRIMARY KEY,
                seller_id TEXT,
                sdr_id TEXT,
                sr_id TEXT,
                won_date TIMESTAMP,
                business_segment TEXT,
                lead_type TEXT,
                lead_behaviour_profile TEXT,
                has_company TEXT,
                has_gtin TEXT,
                average_stock TEXT,
                business_type TEXT,
                declared_product_catalog_size TEXT,
                declared_monthly_revenue TEXT
            );
        ",
        date_columns: &["won_date"],
        primary_key: Some("mql_id"),
    },
];

/// The validated builtin registry.
pub fn builtin() -> Result<Registry, RegistryError> {
    Registry::new(SPECS.to_vec())
}
