mod containers;
mod donation_tests;
mod pg_pool_tests;
