mod width_util_tests;
