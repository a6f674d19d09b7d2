//! Generated book catalog
//!
//! Eight real books seed the catalog; every further product borrows a seed's
//! category and price band and gets a title and blurb from that category's
//! templates. Generation is seeded so a given size always yields the same
//! catalog.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::catalog::Product;

pub const CATEGORIES: [&str; 8] = [
    "Fiction",
    "Non-Fiction",
    "Science",
    "Technology",
    "Business",
    "Health",
    "History",
    "Art",
];

struct SeedBook {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    stock: u32,
    image: &'static str,
}

static SEED_BOOKS: [SeedBook; 8] = [
    SeedBook {
        name: "The Great Gatsby",
        description: "A classic tale of the American Dream in the Jazz Age",
        price: 12.99,
        category: "Fiction",
        stock: 45,
        image: "https://covers.openlibrary.org/b/id/7222246-L.jpg",
    },
    SeedBook {
        name: "Sapiens",
        description: "A brief history of humankind",
        price: 18.99,
        category: "History",
        stock: 32,
        image: "https://covers.openlibrary.org/b/id/8235557-L.jpg",
    },
    SeedBook {
        name: "Clean Code",
        description: "A handbook of agile software craftsmanship",
        price: 45.99,
        category: "Technology",
        stock: 28,
        image: "https://covers.openlibrary.org/b/id/8227858-L.jpg",
    },
    SeedBook {
        name: "Atomic Habits",
        description: "Tiny changes, remarkable results",
        price: 16.99,
        category: "Business",
        stock: 60,
        image: "https://covers.openlibrary.org/b/id/10958382-L.jpg",
    },
    SeedBook {
        name: "1984",
        description: "A dystopian social science fiction novel",
        price: 14.99,
        category: "Fiction",
        stock: 50,
        image: "https://covers.openlibrary.org/b/id/7222246-L.jpg",
    },
    SeedBook {
        name: "Thinking, Fast and Slow",
        description: "The two systems that drive the way we think",
        price: 19.99,
        category: "Science",
        stock: 38,
        image: "https://covers.openlibrary.org/b/id/7897643-L.jpg",
    },
    SeedBook {
        name: "The Lean Startup",
        description: "How constant innovation creates radically successful businesses",
        price: 22.99,
        category: "Business",
        stock: 42,
        image: "https://covers.openlibrary.org/b/id/7280888-L.jpg",
    },
    SeedBook {
        name: "Brief History of Time",
        description: "From the Big Bang to black holes",
        price: 17.99,
        category: "Science",
        stock: 35,
        image: "https://covers.openlibrary.org/b/id/8235557-L.jpg",
    },
];

const ADJECTIVES: [&str; 11] = [
    "Silent", "Hidden", "Lost", "Eternal", "Modern", "Ancient",
    "Ultimate", "Complete", "Essential", "Revolutionary", "Practical",
];
const NOUNS: [&str; 9] = [
    "Journey", "Story", "Mystery", "Adventure", "Legend",
    "Challenge", "Revolution", "Transformation", "Discovery",
];
const PLACES: [&str; 9] = [
    "Tomorrow", "Yesterday", "Paradise", "Shadows", "Dawn",
    "Midnight", "Heaven", "Time", "Dreams",
];
const TOPICS: [&str; 10] = [
    "Innovation", "Leadership", "Creativity", "Success", "Productivity",
    "Mind", "Learning", "Change", "Growth", "Excellence",
];
const NUMBERS: [&str; 6] = ["3", "5", "7", "10", "12", "21"];

struct Templates {
    titles: &'static [&'static str],
    descriptions: &'static [&'static str],
}

fn templates_for(category: &str) -> Templates {
    match category {
        "Fiction" => Templates {
            titles: &["The {adjective} {noun}", "{noun} of {place}", "The Last {noun}", "{adjective} Dreams", "Beyond the {noun}"],
            descriptions: &[
                "A captivating tale of {topic} and {topic2}",
                "An unforgettable journey through {place}",
                "{adjective} story that will keep you turning pages",
                "A masterpiece of contemporary fiction",
            ],
        },
        "History" => Templates {
            titles: &["{adjective} History of {topic}", "The Rise of {topic}", "{topic}: A Journey", "Understanding {topic}", "{topic} Through the Ages"],
            descriptions: &[
                "A comprehensive exploration of {topic}",
                "Discover the untold story of {topic}",
                "From ancient times to the modern era",
                "The definitive history of {topic}",
            ],
        },
        "Technology" => Templates {
            titles: &["{adjective} Code", "Mastering {topic}", "The Art of {topic}", "{topic} Patterns", "Modern {topic}"],
            descriptions: &[
                "Master the fundamentals of {topic}",
                "A practical guide to {topic} excellence",
                "Learn industry best practices and techniques",
                "Essential knowledge for modern developers",
            ],
        },
        "Business" => Templates {
            titles: &["{adjective} {noun}", "The {number} Laws of {topic}", "{topic} Mastery", "From Zero to {topic}", "The {topic} Playbook"],
            descriptions: &[
                "Transform your approach to {topic}",
                "Proven strategies for success in {topic}",
                "Build better habits and achieve more",
                "The ultimate guide to {topic}",
            ],
        },
        "Science" => Templates {
            titles: &["{adjective} {topic}", "The Science of {topic}", "{topic} Explained", "A Brief {topic}", "Thinking About {topic}"],
            descriptions: &[
                "Explore the fascinating world of {topic}",
                "Understanding the universe through {topic}",
                "Complex concepts made simple",
                "A journey through scientific discovery",
            ],
        },
        "Health" => Templates {
            titles: &["{adjective} Body", "The {topic} Method", "Heal with {topic}", "{topic} for Life", "The Science of {topic}"],
            descriptions: &[
                "Improve your wellness through {topic}",
                "Natural approaches to better health",
                "Science-based strategies for {topic}",
                "Transform your body and mind",
            ],
        },
        "Art" => Templates {
            titles: &["The {adjective} Canvas", "{topic} Masterclass", "Creating {adjective} Art", "{topic} Techniques", "The Art of {topic}"],
            descriptions: &[
                "Master the techniques of great artists",
                "From beginner to expert in {topic}",
                "Unlock your creative potential",
                "The complete guide to {topic}",
            ],
        },
        _ => Templates {
            titles: &["{adjective} {noun}", "The Power of {topic}", "{topic} Revolution", "Living {adjective}", "The {topic} Effect"],
            descriptions: &[
                "Life-changing insights on {topic}",
                "Practical wisdom for everyday life",
                "Transform your {topic} today",
                "Essential reading for personal growth",
            ],
        },
    }
}

fn pick<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

fn fill_template(rng: &mut StdRng, template: &str) -> String {
    let mut out = template.to_string();
    for (placeholder, words) in [
        ("{adjective}", &ADJECTIVES[..]),
        ("{noun}", &NOUNS[..]),
        ("{place}", &PLACES[..]),
        ("{topic2}", &TOPICS[..]),
        ("{topic}", &TOPICS[..]),
        ("{number}", &NUMBERS[..]),
    ] {
        if out.contains(placeholder) {
            let word = pick(rng, words);
            out = out.replacen(placeholder, word, 1);
        }
    }
    out
}

fn seed_product(index: usize, seed: &SeedBook) -> Product {
    Product {
        id: index as u32 + 1,
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        price: seed.price,
        category: seed.category.to_string(),
        stock: seed.stock,
        image: Some(seed.image.to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// Build a catalog of `count` products
///
/// The seed books come first, so small catalogs are exactly the seeds and
/// every catalog contains them.
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut products: Vec<Product> = SEED_BOOKS
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, book)| seed_product(i, book))
        .collect();

    for index in products.len()..count {
        let template_book = &SEED_BOOKS[index % SEED_BOOKS.len()];
        let templates = templates_for(template_book.category);

        let title = pick(&mut rng, templates.titles);
        let blurb = pick(&mut rng, templates.descriptions);
        let name = fill_template(&mut rng, title);
        let description = fill_template(&mut rng, blurb);

        // Within 30% of the template book's price, rounded to cents
        let low = template_book.price * 0.7;
        let high = template_book.price * 1.3;
        let price = (rng.gen_range(low..high) * 100.0).round() / 100.0;

        let stock = rng.gen_range(1..=60);

        products.push(Product {
            id: index as u32 + 1,
            name,
            description,
            price,
            category: template_book.category.to_string(),
            stock,
            image: Some(format!("https://picsum.photos/seed/book-{}/300/400", index + 1)),
            created_at: None,
            updated_at: None,
        });
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listable;
    use std::collections::HashSet;

    #[test]
    fn test_seed_books_first() {
        let catalog = generate_catalog(200, 7);
        assert_eq!(catalog.len(), 200);
        assert_eq!(catalog[0].name, "The Great Gatsby");
        assert_eq!(catalog[7].name, "Brief History of Time");
    }

    #[test]
    fn test_small_catalog_is_prefix_of_seeds() {
        let catalog = generate_catalog(3, 7);
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["The Great Gatsby", "Sapiens", "Clean Code"]);
        assert!(generate_catalog(0, 7).is_empty());
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let catalog = generate_catalog(120, 1);
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 120);
        assert_eq!(catalog.last().map(|p| p.id), Some(120));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_catalog(50, 42), generate_catalog(50, 42));
    }

    #[test]
    fn test_generated_fields_are_filled() {
        for product in generate_catalog(100, 3).iter().skip(8) {
            assert!(!product.name.contains('{'), "unfilled title {}", product.name);
            assert!(!product.description.contains('{'));
            assert!(CATEGORIES.contains(&product.category.as_str()));
            assert!(product.price > 0.0);
            assert!(product.stock >= 1);
        }
    }
}
