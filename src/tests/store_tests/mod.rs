mod checkout_tests;
mod dashboard_tests;
