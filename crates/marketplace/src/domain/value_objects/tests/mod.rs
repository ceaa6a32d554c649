mod business_name_test;
mod price_test;
mod vendor_lookup_test;
