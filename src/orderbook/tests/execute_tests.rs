use crate::orderbook::{Notification, Side};
use crate::venue::Venue;
use crate::OrderBook;

#[test]
fn partial_execution_reduces_remaining_without_deleting_the_level() {
    let mut book: OrderBook<&str> = OrderBook::new("AAPL");
    book.on_add("o1", Venue::Cboe, Side::Bid, 100.00, 100).unwrap();

    let notification = book.on_execute(&"o1", 40).unwrap();
    match notification {
        Notification::Execution {
            exec_price,
            remaining_aggregate,
            active_venues,
            ..
        } => {
            assert_eq!(exec_price, 100.00);
            assert_eq!(remaining_aggregate, 60);
            assert_eq!(active_venues, "CBOE");
        }
        other => panic!("expected an Execution notification, got {other:?}"),
    }
    assert!(book.has_order(&"o1"));
    assert_eq!(book.best_bid(), Some(100.00));
}

#[test]
fn overshooting_execution_is_clamped_to_what_was_resting() {
    let mut book: OrderBook<&str> = OrderBook::new("AAPL");
    book.on_add("o1", Venue::Cboe, Side::Bid, 100.00, 100).unwrap();

    let notification = book.on_execute(&"o1", 1_000).unwrap();
    match notification {
        Notification::Execution {
            remaining_aggregate,
            ..
        } => assert_eq!(remaining_aggregate, 0),
        other => panic!("expected an Execution notification, got {other:?}"),
    }
    assert!(!book.has_order(&"o1"));
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.level_count(Side::Bid), 0);
}

#[test]
fn full_execution_of_one_venue_falls_back_to_the_other_venues_still_resting() {
    let mut book: OrderBook<&str> = OrderBook::new("AAPL");
    book.on_add("o1", Venue::Cboe, Side::Bid, 100.00, 100).unwrap();
    book.on_add("o2", Venue::Ise, Side::Bid, 100.00, 50).unwrap();

    let notification = book.on_execute(&"o1", 100).unwrap();
    match notification {
        Notification::Execution {
            remaining_aggregate,
            active_venues,
            ..
        } => {
            assert_eq!(remaining_aggregate, 50);
            assert_eq!(active_venues, "ISE");
        }
        other => panic!("expected an Execution notification, got {other:?}"),
    }
    assert!(!book.has_order(&"o1"));
    assert_eq!(book.best_bid(), Some(100.00));
    assert_eq!(book.level_count(Side::Bid), 1);
}

#[test]
fn execution_draining_the_best_level_falls_back_to_the_next_best() {
    let mut book: OrderBook<&str> = OrderBook::new("AAPL");
    book.on_add("o1", Venue::Cboe, Side::Bid, 100.00, 100).unwrap();
    book.on_add("o2", Venue::Ise, Side::Bid, 100.05, 50).unwrap();

    book.on_execute(&"o2", 50).unwrap();

    assert_eq!(book.best_bid(), Some(100.00));
    assert_eq!(book.level_count(Side::Bid), 1);
}

#[test]
fn execution_against_an_unknown_oid_is_rejected() {
    let mut book: OrderBook<&str> = OrderBook::new("AAPL");
    let err = book.on_execute(&"ghost", 10).unwrap_err();
    assert_eq!(
        err,
        crate::OrderBookError::UnknownOrder {
            oid: format!("{:?}", "ghost")
        }
    );
}
