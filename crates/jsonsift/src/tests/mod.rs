mod extract_bad;
mod property_order;
