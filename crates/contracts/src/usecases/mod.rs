pub mod u501_simulate_commissions;
