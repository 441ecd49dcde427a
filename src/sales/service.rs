//! The sales orchestrator.

use crate::{
    cart::{Cart, CartStorage},
    error::SalesError,
    offering::{Offer, OfferCalculator},
    payment::{PaymentGateway, RegisterPaymentRequest},
    productdetails::ProductDetailsProvider,
    reservation::{OfferAcceptanceRequest, Reservation, ReservationDetails, ReservationStorage},
};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};
use uuid::Uuid;

/// Checkout flow for a customer: build a cart, view the offer, accept it.
pub struct Sales {
    cart_storage: Arc<dyn CartStorage>,
    product_details: Arc<dyn ProductDetailsProvider>,
    offer_calculator: OfferCalculator,
    payment_gateway: Arc<dyn PaymentGateway>,
    reservation_storage: Arc<dyn ReservationStorage>,

    /// Serializes load-modify-save of a customer's cart.
    customer_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl Sales {
    pub fn new(
        cart_storage: Arc<dyn CartStorage>,
        product_details: Arc<dyn ProductDetailsProvider>,
        offer_calculator: OfferCalculator,
        payment_gateway: Arc<dyn PaymentGateway>,
        reservation_storage: Arc<dyn ReservationStorage>,
    ) -> Self {
        Self {
            cart_storage,
            product_details,
            offer_calculator,
            payment_gateway,
            reservation_storage,
            customer_locks: DashMap::new(),
        }
    }

    /// Appends `product_id` to the customer's cart.
    ///
    /// Fails with [`SalesError::NoSuchProduct`] for an unknown product, in
    /// which case the stored cart is left alone.
    pub fn add_to_cart(&self, customer_id: &str, product_id: &str) -> Result<(), SalesError> {
        let product = self.product_details.load(product_id)?.ok_or_else(|| {
            warn!(customer_id, product_id, "Rejected unknown product");
            SalesError::NoSuchProduct(product_id.to_string())
        })?;

        self.with_customer_lock(customer_id, || {
            let mut cart = self.load_cart_for_customer(customer_id)?;
            cart.add(product.id);
            let items = cart.len();
            self.cart_storage.add_for_customer(customer_id, cart)?;

            info!(customer_id, product_id, items, "Added product to cart");
            Ok(())
        })
    }

    /// Prices the customer's cart as it is right now.
    pub fn get_current_offer(&self, customer_id: &str) -> Result<Offer, SalesError> {
        let cart = self.load_cart_for_customer(customer_id)?;
        self.offer_calculator.calculate_offer(cart.items())
    }

    /// Accepts the current offer: registers a payment and stores a reservation.
    ///
    /// The offer is recomputed here, so the charge reflects the cart at the
    /// moment of acceptance. Nothing is stored unless the payment registers.
    pub fn accept_offer(
        &self,
        customer_id: &str,
        request: OfferAcceptanceRequest,
    ) -> Result<ReservationDetails, SalesError> {
        let offer = self.get_current_offer(customer_id)?;
        let reservation_id = Uuid::new_v4();

        let payment = self
            .payment_gateway
            .register(&RegisterPaymentRequest::of(reservation_id, &request, &offer))
            .map_err(|e| {
                warn!(customer_id, %reservation_id, error = %e, "Payment registration failed");
                e
            })?;

        let total = offer.total;
        let reservation = Reservation::of(reservation_id, customer_id, request, offer, payment);
        let details = reservation.details();
        self.reservation_storage.save(reservation)?;

        info!(customer_id, %reservation_id, %total, "Offer accepted");
        Ok(details)
    }

    fn load_cart_for_customer(&self, customer_id: &str) -> Result<Cart, SalesError> {
        Ok(self
            .cart_storage
            .load(customer_id)?
            .unwrap_or_else(Cart::empty))
    }

    /// Runs `f` holding the customer's lock, dropping the lock entry once
    /// no other caller holds it.
    fn with_customer_lock<T>(&self, customer_id: &str, f: impl FnOnce() -> T) -> T {
        let lock = self
            .customer_locks
            .entry(customer_id.to_string())
            .or_default()
            .clone();

        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };

        drop(lock);
        self.customer_locks
            .remove_if(customer_id, |_, lock| Arc::strong_count(lock) == 1);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cart::InMemoryCartStorage,
        config::DiscountConfig,
        error::{PaymentError, StorageError},
        payment::{DummyPaymentGateway, PaymentData},
        productdetails::{CatalogProductDetailsProvider, Product, ProductCatalog, ProductDetails},
        reservation::InMemoryReservationStorage,
    };
    use rust_decimal::Decimal;

    struct FailingPaymentGateway;

    impl PaymentGateway for FailingPaymentGateway {
        fn register(&self, _request: &RegisterPaymentRequest) -> Result<PaymentData, PaymentError> {
            Err(PaymentError::Unavailable("gateway down".into()))
        }
    }

    /// Store whose every call fails, standing in for a lost backend.
    struct UnavailableStore;

    impl CartStorage for UnavailableStore {
        fn load(&self, _customer_id: &str) -> Result<Option<Cart>, StorageError> {
            Err(StorageError::Unavailable("carts down".into()))
        }

        fn add_for_customer(&self, _customer_id: &str, _cart: Cart) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("carts down".into()))
        }
    }

    impl ReservationStorage for UnavailableStore {
        fn save(&self, _reservation: Reservation) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("reservations down".into()))
        }

        fn load(&self, _id: Uuid) -> Result<Option<Reservation>, StorageError> {
            Err(StorageError::Unavailable("reservations down".into()))
        }
    }

    impl ProductDetailsProvider for UnavailableStore {
        fn load(&self, _product_id: &str) -> Result<Option<ProductDetails>, StorageError> {
            Err(StorageError::Unavailable("catalog down".into()))
        }
    }

    fn sales_with(
        carts: Arc<dyn CartStorage>,
        provider: Arc<dyn ProductDetailsProvider>,
        reservations: Arc<dyn ReservationStorage>,
    ) -> Sales {
        Sales::new(
            carts,
            provider.clone(),
            OfferCalculator::new(provider, &DiscountConfig::default()),
            Arc::new(DummyPaymentGateway::new("https://pay.example.com")),
            reservations,
        )
    }

    fn demo_provider() -> Arc<dyn ProductDetailsProvider> {
        Arc::new(CatalogProductDetailsProvider::new(Arc::new(
            ProductCatalog::with_demo_products(),
        )))
    }

    struct Fixture {
        sales: Arc<Sales>,
        catalog: Arc<ProductCatalog>,
        carts: Arc<InMemoryCartStorage>,
        reservations: Arc<InMemoryReservationStorage>,
    }

    fn fixture_with_gateway(gateway: Arc<dyn PaymentGateway>) -> Fixture {
        let catalog = Arc::new(ProductCatalog::from_products([
            Product {
                id: "lego".into(),
                name: "Lego".into(),
                price: Decimal::from(120),
            },
            Product {
                id: "book".into(),
                name: "Book".into(),
                price: Decimal::from(100),
            },
        ]));
        let provider: Arc<dyn ProductDetailsProvider> =
            Arc::new(CatalogProductDetailsProvider::new(catalog.clone()));
        let carts = Arc::new(InMemoryCartStorage::new());
        let reservations = Arc::new(InMemoryReservationStorage::new());

        let sales = Sales::new(
            carts.clone(),
            provider.clone(),
            OfferCalculator::new(provider, &DiscountConfig::default()),
            gateway,
            reservations.clone(),
        );

        Fixture {
            sales: Arc::new(sales),
            catalog,
            carts,
            reservations,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_gateway(Arc::new(DummyPaymentGateway::new("https://pay.example.com")))
    }

    #[test]
    fn offer_for_unknown_customer_is_empty() {
        let f = fixture();
        let offer = f.sales.get_current_offer("nobody").unwrap();

        assert_eq!(offer.total, Decimal::ZERO);
        assert!(offer.discounts.is_empty());
    }

    #[test]
    fn five_items_at_120_cost_430() {
        let f = fixture();
        for _ in 0..5 {
            f.sales.add_to_cart("kasia", "lego").unwrap();
        }

        let offer = f.sales.get_current_offer("kasia").unwrap();
        assert_eq!(offer.line_items.len(), 5);
        assert_eq!(offer.total, Decimal::from(430));
    }

    #[test]
    fn carts_are_per_customer() {
        let f = fixture();
        f.sales.add_to_cart("kasia", "lego").unwrap();
        f.sales.add_to_cart("michal", "book").unwrap();

        assert_eq!(
            f.sales.get_current_offer("kasia").unwrap().total,
            Decimal::from(120)
        );
        assert_eq!(
            f.sales.get_current_offer("michal").unwrap().total,
            Decimal::from(100)
        );
    }

    #[test]
    fn unknown_product_leaves_cart_untouched() {
        let f = fixture();
        f.sales.add_to_cart("kasia", "lego").unwrap();

        let result = f.sales.add_to_cart("kasia", "ghost");

        assert!(matches!(result, Err(SalesError::NoSuchProduct(id)) if id == "ghost"));
        let cart = f.carts.load("kasia").unwrap().unwrap();
        assert_eq!(cart.items(), ["lego"]);
    }

    #[test]
    fn unknown_product_does_not_create_a_cart() {
        let f = fixture();
        assert!(f.sales.add_to_cart("kasia", "ghost").is_err());
        assert!(f.carts.load("kasia").unwrap().is_none());
    }

    #[test]
    fn getting_the_offer_changes_nothing() {
        let f = fixture();
        f.sales.add_to_cart("kasia", "lego").unwrap();

        let first = f.sales.get_current_offer("kasia").unwrap();
        let second = f.sales.get_current_offer("kasia").unwrap();

        assert_eq!(first, second);
        assert_eq!(f.carts.load("kasia").unwrap().unwrap().len(), 1);
    }

    #[test]
    fn accept_offer_stores_reservation_with_live_offer() {
        let f = fixture();
        f.sales.add_to_cart("kasia", "lego").unwrap();
        let viewed = f.sales.get_current_offer("kasia").unwrap();
        assert_eq!(viewed.total, Decimal::from(120));

        for _ in 0..4 {
            f.sales.add_to_cart("kasia", "lego").unwrap();
        }

        let details = f
            .sales
            .accept_offer("kasia", OfferAcceptanceRequest::default())
            .unwrap();

        let reservation = f.reservations.load(details.reservation_id).unwrap().unwrap();
        assert_eq!(reservation.offer().total, Decimal::from(430));
        assert_eq!(reservation.customer_id(), "kasia");
        assert_eq!(reservation.payment_url(), details.payment_url);
        assert!(details.payment_url.starts_with("https://pay.example.com/"));
    }

    #[test]
    fn price_change_between_view_and_accept_is_charged() {
        let f = fixture();
        f.sales.add_to_cart("kasia", "book").unwrap();
        assert_eq!(
            f.sales.get_current_offer("kasia").unwrap().total,
            Decimal::from(100)
        );

        f.catalog.add(Product {
            id: "book".into(),
            name: "Book".into(),
            price: Decimal::from(80),
        });

        let details = f
            .sales
            .accept_offer("kasia", OfferAcceptanceRequest::default())
            .unwrap();
        let reservation = f.reservations.load(details.reservation_id).unwrap().unwrap();
        assert_eq!(reservation.offer().total, Decimal::from(80));
    }

    #[test]
    fn failed_payment_stores_no_reservation() {
        let f = fixture_with_gateway(Arc::new(FailingPaymentGateway));
        f.sales.add_to_cart("kasia", "lego").unwrap();

        let result = f.sales.accept_offer("kasia", OfferAcceptanceRequest::default());

        assert!(matches!(result, Err(SalesError::PaymentRegistration(_))));
        assert_eq!(f.reservations.count(), 0);
    }

    #[test]
    fn concurrent_adds_do_not_lose_items() {
        let f = fixture();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sales = f.sales.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        sales.add_to_cart("kasia", "book").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(f.carts.load("kasia").unwrap().unwrap().len(), 200);
    }

    #[test]
    fn lock_entries_are_dropped_after_failed_adds() {
        let f = fixture();

        for i in 0..100 {
            let result = f.sales.add_to_cart(&format!("anon-{}", i), "ghost");
            assert!(result.is_err());
        }

        assert_eq!(f.sales.customer_locks.len(), 0);
    }

    #[test]
    fn lock_entries_are_dropped_after_successful_adds() {
        let f = fixture();

        for i in 0..10 {
            f.sales.add_to_cart(&format!("anon-{}", i), "book").unwrap();
        }

        assert_eq!(f.sales.customer_locks.len(), 0);
        assert_eq!(f.carts.load("anon-3").unwrap().unwrap().items(), ["book"]);
    }

    #[test]
    fn lock_entries_are_dropped_after_concurrent_adds() {
        let f = fixture();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sales = f.sales.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        sales.add_to_cart("kasia", "book").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(f.carts.load("kasia").unwrap().unwrap().len(), 100);
        assert_eq!(f.sales.customer_locks.len(), 0);
    }

    #[test]
    fn overflowing_cart_is_an_error_not_a_panic() {
        let f = fixture();
        f.catalog.add(Product {
            id: "big".into(),
            name: "Big".into(),
            price: Decimal::MAX,
        });
        f.sales.add_to_cart("kasia", "big").unwrap();
        f.sales.add_to_cart("kasia", "big").unwrap();

        let offer = f.sales.get_current_offer("kasia");
        let accepted = f.sales.accept_offer("kasia", OfferAcceptanceRequest::default());

        assert!(matches!(offer, Err(SalesError::PriceOverflow)));
        assert!(matches!(accepted, Err(SalesError::PriceOverflow)));
        assert_eq!(f.reservations.count(), 0);
    }

    #[test]
    fn failing_cart_store_surfaces_storage_error() {
        let store = Arc::new(UnavailableStore);
        let sales = sales_with(store.clone(), demo_provider(), store);

        let added = sales.add_to_cart("kasia", "lego-set-1");
        let offer = sales.get_current_offer("kasia");

        assert!(matches!(added, Err(SalesError::Storage(_))));
        assert!(matches!(offer, Err(SalesError::Storage(_))));
        assert_eq!(sales.customer_locks.len(), 0);
    }

    #[test]
    fn failing_product_provider_surfaces_storage_error() {
        let sales = sales_with(
            Arc::new(InMemoryCartStorage::new()),
            Arc::new(UnavailableStore),
            Arc::new(InMemoryReservationStorage::new()),
        );

        let result = sales.add_to_cart("kasia", "lego-set-1");

        assert!(matches!(result, Err(SalesError::Storage(_))));
    }

    #[test]
    fn failing_reservation_store_fails_acceptance() {
        let sales = sales_with(
            Arc::new(InMemoryCartStorage::new()),
            demo_provider(),
            Arc::new(UnavailableStore),
        );
        sales.add_to_cart("kasia", "lego-set-1").unwrap();

        let result = sales.accept_offer("kasia", OfferAcceptanceRequest::default());

        assert!(matches!(result, Err(SalesError::Storage(_))));
    }
}
