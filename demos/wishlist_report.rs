//! # Wishlist Report Example
//!
//! This example demonstrates the normalization engine on a small inline
//! batch of raw products, the way the (out-of-scope) crawling layer would
//! hand them over: explicit per-unit pricing where the page reports one,
//! name-derived pricing everywhere else, and an override-patched product.

use shopunit::pipeline::normalize_batch;
use shopunit::product::RawProduct;
use shopunit::profiles;

fn raw(id: &str, name: &str, price: f64) -> RawProduct {
    RawProduct {
        id: id.to_string(),
        name: name.to_string(),
        price,
        raw_unitary_price: None,
        raw_unit_label: None,
        category: None,
    }
}

fn main() {
    env_logger::init();

    println!("🛒 Wishlist Normalization Example");
    println!("=================================\n");

    // Example 1: Eroski, everything derived from product names
    println!("Example 1: Eroski (name-derived pricing)");
    println!("----------------------------------------");

    let mut colonia = raw("e4", "Agua de colonia fresca 200 ml", 2.0);
    colonia.category = Some("Perfumería".to_string());

    let eroski_list = vec![
        raw("e1", "Detergente máquina polvo 3x60 g", 3.0),
        raw("e2", "Cerveza rubia lata 6x33 cl", 2.97),
        raw("e3", "Papel de cocina 2+1 rollos", 2.1),
        colonia,
        raw("e5", "Bolsas de congelado pequeñas", 1.1),
    ];

    let (catalog, failures) = normalize_batch(&profiles::EROSKI, &eroski_list);
    for id in ["e1", "e2", "e3", "e4", "e5"] {
        if let Some(product) = catalog.get_product(id) {
            println!("  {product}");
        }
    }
    println!("  ({} products, {} failed)\n", catalog.len(), failures.len());

    // Example 2: Mercadona, explicit per-unit labels plus an override
    println!("Example 2: Mercadona (explicit labels + override)");
    println!("-------------------------------------------------");

    let mut leche = raw("m1", "Leche entera brik", 0.89);
    leche.raw_unitary_price = Some(0.89);
    leche.raw_unit_label = Some("1 LITRO".to_string());

    // Known defect: the page prices this fixed-weight cheese per kilo.
    let mut queso = raw("43401", "Queso fresco de Burgos", 2.35);
    queso.raw_unitary_price = Some(9.4);
    queso.raw_unit_label = Some("1 KILO".to_string());

    let mercadona_list = vec![leche, queso, raw("m3", "Colonia infantil 750 cc", 3.0)];

    let (catalog, failures) = normalize_batch(&profiles::MERCADONA, &mercadona_list);
    for id in ["m1", "43401", "m3"] {
        if let Some(product) = catalog.get_product(id) {
            println!("  {product}");
        }
    }
    println!("  ({} products, {} failed)\n", catalog.len(), failures.len());

    // Example 3: Hipercor, a dozen split down to units
    println!("Example 3: Hipercor (pack labels)");
    println!("---------------------------------");

    let mut huevos = raw("h1", "Huevos frescos clase L", 1.8);
    huevos.raw_unitary_price = Some(1.8);
    huevos.raw_unit_label = Some("Docena".to_string());

    let (catalog, failures) = normalize_batch(&profiles::HIPERCOR, &[huevos]);
    for product in catalog.iter() {
        println!("  {product}");
    }
    println!("  ({} products, {} failed)", catalog.len(), failures.len());
}
