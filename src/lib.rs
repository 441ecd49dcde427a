//! Sales Service Library
//!
//! Cart, offer and reservation flow of an online shop: customers collect
//! products in a cart, get a discounted offer, and accept it to create a
//! reservation bound to a registered payment.

// Domain modules
pub mod cart;
pub mod offering;
pub mod payment;
pub mod productdetails;
pub mod reservation;
pub mod sales;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
