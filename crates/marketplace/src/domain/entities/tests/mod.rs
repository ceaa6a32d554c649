mod product_test;
