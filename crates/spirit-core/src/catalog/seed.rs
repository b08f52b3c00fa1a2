//! Built-in product data for the storefront.
//!
//! Eleven bottles across the four categories. Declaration order is catalog
//! order, which every query preserves.

use chrono::NaiveDate;

use crate::types::{Category, Product, Review};

/// Review dates are static literals; an invalid one falls back to the epoch
/// rather than failing the whole catalog.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn review(id: u32, author: &str, rating: u8, comment: &str, on: NaiveDate) -> Review {
    Review {
        id,
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: on,
    }
}

struct Bottle {
    id: u32,
    name: &'static str,
    brand: &'static str,
    price: i64,
    rating_tenths: u8,
    category: Category,
    alcohol: &'static str,
    volume: &'static str,
    description: &'static str,
}

impl Bottle {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name.to_string(),
            brand: self.brand.to_string(),
            price: self.price,
            category: self.category,
            alcohol: self.alcohol.to_string(),
            volume: self.volume.to_string(),
            description: self.description.to_string(),
            rating_tenths: self.rating_tenths,
            availability: true,
            discount: None,
            original_price: None,
            reviews: Vec::new(),
        }
    }
}

/// Returns the storefront's product list.
pub fn seed_products() -> Vec<Product> {
    let mut old_monk = Bottle {
        id: 1,
        name: "Old Monk",
        brand: "Old Monk",
        price: 850,
        rating_tenths: 48,
        category: Category::Rum,
        alcohol: "42.8%",
        volume: "750ml",
        description: "India's most beloved dark rum with a smooth, rich flavor profile.",
    }
    .into_product();
    old_monk.discount = Some(15);
    old_monk.original_price = Some(1000);
    old_monk.reviews = vec![
        review(1, "Rajesh K.", 5, "Classic taste, never disappoints!", date(2024, 1, 15)),
        review(2, "Priya S.", 4, "Great for cocktails", date(2024, 1, 10)),
    ];

    let mut mcdowells = Bottle {
        id: 2,
        name: "McDowell's Celebration",
        brand: "McDowell's",
        price: 720,
        rating_tenths: 45,
        category: Category::Rum,
        alcohol: "42.8%",
        volume: "750ml",
        description: "Premium aged rum with notes of vanilla and caramel.",
    }
    .into_product();
    mcdowells.reviews = vec![review(
        3,
        "Amit P.",
        4,
        "Smooth finish, good value",
        date(2024, 1, 12),
    )];

    let contessa = Bottle {
        id: 3,
        name: "Contessa Rum",
        brand: "Contessa",
        price: 650,
        rating_tenths: 42,
        category: Category::Rum,
        alcohol: "42.8%",
        volume: "750ml",
        description: "Light and versatile rum perfect for mixing.",
    }
    .into_product();

    let mut magic_moments = Bottle {
        id: 4,
        name: "Magic Moments",
        brand: "Magic Moments",
        price: 650,
        rating_tenths: 45,
        category: Category::Vodka,
        alcohol: "40%",
        volume: "750ml",
        description: "Premium triple-distilled vodka for the perfect cocktail experience.",
    }
    .into_product();
    magic_moments.discount = Some(10);
    magic_moments.original_price = Some(720);
    magic_moments.reviews = vec![review(
        4,
        "Neha M.",
        5,
        "Best vodka in this price range",
        date(2024, 1, 8),
    )];

    let romanov = Bottle {
        id: 5,
        name: "Romanov Vodka",
        brand: "Romanov",
        price: 580,
        rating_tenths: 43,
        category: Category::Vodka,
        alcohol: "40%",
        volume: "750ml",
        description: "Crystal clear vodka with a clean, crisp taste.",
    }
    .into_product();

    let white_mischief = Bottle {
        id: 6,
        name: "White Mischief",
        brand: "White Mischief",
        price: 750,
        rating_tenths: 44,
        category: Category::Vodka,
        alcohol: "40%",
        volume: "750ml",
        description: "Premium vodka with a smooth, refined character.",
    }
    .into_product();

    let mut kingfisher = Bottle {
        id: 7,
        name: "Kingfisher Premium",
        brand: "Kingfisher",
        price: 180,
        rating_tenths: 43,
        category: Category::Beer,
        alcohol: "4.8%",
        volume: "650ml",
        description: "India's favorite premium lager beer with crisp, refreshing taste.",
    }
    .into_product();
    kingfisher.reviews = vec![review(
        5,
        "Vikram R.",
        4,
        "Refreshing after a long day",
        date(2024, 1, 14),
    )];

    let bira = Bottle {
        id: 8,
        name: "Bira 91 White",
        brand: "Bira 91",
        price: 220,
        rating_tenths: 46,
        category: Category::Beer,
        alcohol: "4.9%",
        volume: "330ml",
        description: "Craft wheat beer with a citrusy flavor and smooth finish.",
    }
    .into_product();

    let mut haywards = Bottle {
        id: 9,
        name: "Haywards 5000",
        brand: "Haywards",
        price: 200,
        rating_tenths: 41,
        category: Category::Beer,
        alcohol: "7%",
        volume: "650ml",
        description: "Strong premium beer with a bold taste.",
    }
    .into_product();
    haywards.availability = false;

    let old_monk_super = Bottle {
        id: 10,
        name: "Old Monk 10000 Super",
        brand: "Old Monk",
        price: 250,
        rating_tenths: 44,
        category: Category::Beer,
        alcohol: "8%",
        volume: "650ml",
        description: "High-strength premium beer with rich malty flavor.",
    }
    .into_product();

    let mut feni = Bottle {
        id: 11,
        name: "Cazulo Feni",
        brand: "Cazulo",
        price: 950,
        rating_tenths: 40,
        category: Category::Traditional,
        alcohol: "43%",
        volume: "750ml",
        description: "Authentic Goan feni made from cashew fruit.",
    }
    .into_product();
    feni.discount = Some(20);
    feni.original_price = Some(1190);
    feni.reviews = vec![review(
        6,
        "Maria D.",
        4,
        "Authentic Goan taste",
        date(2024, 1, 5),
    )];

    vec![
        old_monk,
        mcdowells,
        contessa,
        magic_moments,
        romanov,
        white_mischief,
        kingfisher,
        bira,
        haywards,
        old_monk_super,
        feni,
    ]
}
