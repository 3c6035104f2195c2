use serde::Serialize;

/// A catalog entry that can be recommended to a user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
    pub image_url: &'static str,
    pub category: &'static str,
}

/// Static mock catalog used by the recommendation endpoint
pub static CATALOG: [Product; 10] = [
    Product {
        id: 1,
        name: "Classic White T-Shirt",
        price: 29.99,
        image_url: "https://example.com/tshirt.jpg",
        category: "tops",
    },
    Product {
        id: 2,
        name: "Blue Jeans",
        price: 79.99,
        image_url: "https://example.com/jeans.jpg",
        category: "bottoms",
    },
    Product {
        id: 3,
        name: "Black Sneakers",
        price: 129.99,
        image_url: "https://example.com/sneakers.jpg",
        category: "shoes",
    },
    Product {
        id: 4,
        name: "Red Dress",
        price: 89.99,
        image_url: "https://example.com/dress.jpg",
        category: "dresses",
    },
    Product {
        id: 5,
        name: "Leather Jacket",
        price: 199.99,
        image_url: "https://example.com/jacket.jpg",
        category: "outerwear",
    },
    Product {
        id: 6,
        name: "Striped Sweater",
        price: 59.99,
        image_url: "https://example.com/sweater.jpg",
        category: "tops",
    },
    Product {
        id: 7,
        name: "Black Pants",
        price: 69.99,
        image_url: "https://example.com/pants.jpg",
        category: "bottoms",
    },
    Product {
        id: 8,
        name: "White Sneakers",
        price: 119.99,
        image_url: "https://example.com/white-sneakers.jpg",
        category: "shoes",
    },
    Product {
        id: 9,
        name: "Summer Dress",
        price: 79.99,
        image_url: "https://example.com/summer-dress.jpg",
        category: "dresses",
    },
    Product {
        id: 10,
        name: "Denim Jacket",
        price: 89.99,
        image_url: "https://example.com/denim-jacket.jpg",
        category: "outerwear",
    },
];
