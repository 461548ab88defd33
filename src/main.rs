use log::info;
use strong_typedef::strong_typedef;

strong_typedef! {
    /// Identifies a row in the users table.
    UserId: u32;
    /// Identifies a row in the products table.
    ProductId: u32;
    /// Distance along a delivery route.
    Meters: f64;
}

struct Order {
    buyer: UserId,
    item: ProductId,
    distance: Meters,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /*
        Both ids are u32 underneath, but the compiler keeps them apart:
            lookup_product(order.buyer)
        does not build.
    */
    let order = Order {
        buyer: UserId::new(123),
        item: ProductId::new(123),
        distance: Meters::new(10.0),
    };
    info!("buyer {:?} ordered product {:?}", order.buyer, order.item);
    info!("product name: {}", lookup_product(order.item));

    if order.buyer == UserId::new(123) {
        info!("buyer 123 is a returning customer");
    }

    let detour = Meters::new(5.0);
    let total = order.distance + detour;
    let saved = order.distance - detour;
    info!("route with detour: {} m", total.value());
    info!("route without the last leg: {} m", saved.value());

    let mut buyers = vec![UserId::new(7), UserId::new(3), order.buyer];
    buyers.sort();
    info!("buyers in id order: {buyers:?}");
}

fn lookup_product(id: ProductId) -> &'static str {
    match id.into_inner() {
        123 => "route planner",
        _ => "unknown",
    }
}
