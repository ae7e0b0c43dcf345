pub mod test_random;
