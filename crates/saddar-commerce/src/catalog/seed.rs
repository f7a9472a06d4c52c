//! Built-in mock catalog.

use crate::catalog::{Brand, Category, Product};
use crate::money::Money;

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_BASE}/{photo}?auto=format&fit=crop&q=80&w=400")
}

pub(crate) fn brands() -> Vec<Brand> {
    [
        ("Nestle", "nestle.com"),
        ("Unilever", "unilever.com"),
        ("Gul Ahmed", "gulahmedshop.com"),
        ("Alkaram", "alkaramstudio.com"),
        ("Khaadi", "khaadi.com"),
        ("PepsiCo", "pepsico.com"),
        ("Zellbury", "zellbury.com"),
        ("Bata", "bata.com"),
    ]
    .into_iter()
    .map(|(name, domain)| Brand::new(name, format!("https://logo.clearbit.com/{domain}")))
    .collect()
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Fresh Milk 1L Pack of 12",
            Category::Dairy,
            "MilkPure",
            Money::pkr(2400),
            "Carton",
            45,
        )
        .with_image(image("photo-1563636619-e910ef49e9cf"))
        .with_description("Ultra-pasteurized fresh milk, rich in calcium.")
        .popular()
        .with_bulk_discount("Save 5% on 10+ cartons"),
        Product::new(
            "2",
            "Cola Classic 500ml Pack of 24",
            Category::Beverages,
            "FizzCo",
            Money::pkr(1800),
            "Case",
            120,
        )
        .with_image(image("photo-1622483767028-3f66f32aef97"))
        .with_description("Refreshing carbonated soft drink.")
        .popular(),
        Product::new(
            "f1",
            "Premium Cotton Kurta - White (Bulk 6pcs)",
            Category::MensFashion,
            "Gul Ahmed",
            Money::pkr(15000),
            "Bundle",
            25,
        )
        .with_image(image("photo-1598554747436-c9293d6a588f"))
        .with_description("100% Cotton embroidered kurtas for men. Mixed sizes.")
        .new_arrival()
        .with_bulk_discount("Rs. 2000 off on 5 bundles"),
        Product::new(
            "f2",
            "Casual Slim Fit Shirts Pack of 10",
            Category::MensFashion,
            "Zellbury",
            Money::pkr(12500),
            "Pack",
            40,
        )
        .with_image(image("photo-1596755094514-f87e34085b2c"))
        .with_description("Variety of colors, slim fit oxford cotton shirts.")
        .popular(),
        Product::new(
            "f3",
            "Unstitched Lawn Suit 3pc (Set of 5)",
            Category::WomensFashion,
            "Alkaram",
            Money::pkr(18500),
            "Set",
            15,
        )
        .with_image(image("photo-1617627143750-d86bc21e42bb"))
        .with_description("Summer collection unstitched 3pc lawn suits. Trendy prints.")
        .popular()
        .with_bulk_discount("Free delivery on 3+ sets"),
        Product::new(
            "f4",
            "Ready-to-Wear Printed Tunic (Assorted 12pcs)",
            Category::WomensFashion,
            "Khaadi",
            Money::pkr(28000),
            "Box",
            10,
        )
        .with_image(image("photo-1585487000160-6ebcfceb0d03"))
        .with_description("Ready to wear digital prints. Best for retail shops.")
        .new_arrival(),
        Product::new(
            "f5",
            "Infant Cotton Rompers (Pack of 24)",
            Category::KidsClothing,
            "KidsJoy",
            Money::pkr(8400),
            "Pack",
            50,
        )
        .with_image(image("photo-1522771930-78848d9293e8"))
        .with_description("Soft organic cotton rompers for infants. Mix designs.")
        .popular(),
        Product::new(
            "f6",
            "Mens Formal Leather Shoes (Lot of 10)",
            Category::Footwear,
            "Bata",
            Money::pkr(25000),
            "Lot",
            8,
        )
        .with_image(image("photo-1533867617858-e7b97e060509"))
        .with_description("Genuine leather formal shoes. Classic black and brown.")
        .with_bulk_discount("10% off for 2 lots"),
        Product::new(
            "3",
            "Basmati Rice 5kg Premium",
            Category::Pulses,
            "GrainGold",
            Money::pkr(1250),
            "Bag",
            80,
        )
        .with_image(image("photo-1586201375761-83865001e31c"))
        .with_description("Long grain aromatic basmati rice.")
        .popular()
        .new_arrival(),
        Product::new(
            "8",
            "Cooking Oil 5L Tin",
            Category::Household,
            "PureDrop",
            Money::pkr(2850),
            "Tin",
            25,
        )
        .with_image(image("photo-1474979266404-7eaacbcd87c5"))
        .with_description("Refined sunflower oil for healthy cooking.")
        .popular(),
    ]
}
