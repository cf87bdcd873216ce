//! The built-in product catalog.
//!
//! Products are authored here and loaded once at startup; the running
//! application never mutates them. Prices are estimates.

use streamline_essentials_core::catalog::{Catalog, Category, Product};
use streamline_essentials_core::types::{Price, ProductId};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Build the full catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board".to_string(),
            price: Price::from_cents(2799),
            label: Some("Best Seller".to_string()),
            image: "https://static.wixstatic.com/media/9f6194_330595360db64e52b1b36842bbc16f56~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_330595360db64e52b1b36842bbc16f56~mv2.jpg".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_330595360db64e52b1b36842bbc16f56~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_330595360db64e52b1b36842bbc16f56~mv2.jpg",
                "https://static.wixstatic.com/media/9f6194_c86e7a3542f64deea856f41cf2523c7c~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_c86e7a3542f64deea856f41cf2523c7c~mv2.jpg",
            ]),
            description: Some("Essenti Board 1/2 in. x 3 ft. x 5 ft. Backer Board offers an optimal foundation for all tile and stone placement. This board incorporates a moisture barrier within it, making it suitable for wet environments like bathtubs and showers. It's versatile enough for dry applications and as a substrate for various materials. Additionally, its lightweight design simplifies the installation process.".to_string()),
            category: Some(Category::EssentiBoard),
            sku: Some("00002".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Eliminates the need for an additional vapor barrier due to its built-in moisture protection",
                "Resistant to mold growth",
                "Exceptional for both tile and non-tile installations, whether wet or dry",
                "Suitable for high-humidity areas",
                "Lighter and more user-friendly compared to cement board",
                "Delivers a smooth and clean finish",
                "Compliant with building codes for wet areas, surpassing the outdated green board standards",
                "Comes with a lifetime limited warranty",
            ]),
            specifications: pairs(&[
                ("Category", "Essenti Board"),
                ("Thickness", "1/2 in."),
                ("Size", "3 ft. x 5 ft."),
                ("Material", "Foam with built-in moisture barrier"),
                ("Warranty", "Lifetime limited"),
            ]),
            sizes: strings(&["1/2 inch | 3'x5'", "1/4 inch | 3'x5'", "2 inch | 3'x5'"]),
        },
        Product {
            id: ProductId::new(2),
            name: "Shower Niche".to_string(),
            price: Price::from_cents(6999),
            label: Some("New Arrival".to_string()),
            image: "https://static.wixstatic.com/media/9f6194_cac81716b4424255a95f171cbce14105~mv2.png/v1/fill/w_548,h_548,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_cac81716b4424255a95f171cbce14105~mv2.png".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_cac81716b4424255a95f171cbce14105~mv2.png/v1/fill/w_548,h_548,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_cac81716b4424255a95f171cbce14105~mv2.png",
                "https://static.wixstatic.com/media/9f6194_2085c175333647c8a0d06a0399ba4da1~mv2.png/v1/fill/w_548,h_548,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_2085c175333647c8a0d06a0399ba4da1~mv2.png",
                "https://static.wixstatic.com/media/9f6194_f141961a7b544e289d09a394fb3de64d~mv2.png/v1/fill/w_548,h_548,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_f141961a7b544e289d09a394fb3de64d~mv2.png",
                "https://static.wixstatic.com/media/9f6194_34fbd490cc6c45eb93bca781d77e74b1~mv2.png/v1/fill/w_548,h_548,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_34fbd490cc6c45eb93bca781d77e74b1~mv2.png",
            ]),
            description: Some("Our Shower Niche is the perfect addition to any bathroom renovation. Made with waterproof materials and fully sealed inside corners, it will keep your shower essentials safe and dry. The strong construction ensures it will last for years to come. Easy to install and ready to tile, this niche is a must-have for any tiled shower. Improve the functionality and style of your bathroom with our Shower Niche.".to_string()),
            category: Some(Category::ShowerKit),
            sku: Some("SE-002".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Waterproof materials and fully sealed inside corners",
                "Keeps shower essentials safe and dry",
                "Strong, long-lasting construction",
                "Easy to install and ready to tile",
                "Improves functionality and style of any bathroom",
            ]),
            specifications: pairs(&[
                ("Category", "Shower Kit"),
                ("Type", "Shower niche"),
                ("Material", "Waterproof composite"),
                ("Finish", "Tile-ready"),
            ]),
            sizes: strings(&[
                "12 in x 20 in | With Shelf",
                "12 in x 20 in | Without Shelf",
                "12 in x 12 in",
            ]),
        },
        Product {
            id: ProductId::new(3),
            name: "Shower Pans".to_string(),
            price: Price::from_cents(22999),
            label: None,
            image: "https://static.wixstatic.com/media/9f6194_7a24038c335e4731b291cac87233fcec~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_7a24038c335e4731b291cac87233fcec~mv2.jpg".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_7a24038c335e4731b291cac87233fcec~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_7a24038c335e4731b291cac87233fcec~mv2.jpg",
            ]),
            description: Some("Our Shower Pans are made of high-quality materials, ensuring durability and longevity. They are completely waterproof, providing a reliable and leak-free base for your shower. We offer a range of sizes to accommodate any bathroom, and custom sizes can be made upon request. Choose from a variety of drain options and configurations to suit your specific needs. Trust our Shower Pans to provide a sturdy and functional foundation for your bathroom renovation.".to_string()),
            category: Some(Category::ShowerKit),
            sku: Some("SE-003".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Made of high-quality materials for durability and longevity",
                "Completely waterproof for reliable, leak-free performance",
                "Available in a range of standard sizes",
                "Custom sizes available upon request",
                "Multiple drain options and configurations",
                "Sturdy and functional foundation for bathroom renovations",
                "Tile-ready surface",
            ]),
            specifications: pairs(&[
                ("Category", "Shower Kit"),
                ("Type", "Shower pan"),
                ("Material", "High-quality waterproof materials"),
                ("Customization", "Custom sizes available"),
                ("Drain", "Multiple options available"),
            ]),
            sizes: strings(&["3'x4'", "3'x5'"]),
        },
        Product {
            id: ProductId::new(5),
            name: "Decoupling Mat".to_string(),
            price: Price::from_cents(32999),
            label: None,
            image: "https://static.wixstatic.com/media/9f6194_dd1e79babfbb4f8f8ef2f83b23d798bf~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_dd1e79babfbb4f8f8ef2f83b23d798bf~mv2.jpg".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_dd1e79babfbb4f8f8ef2f83b23d798bf~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_dd1e79babfbb4f8f8ef2f83b23d798bf~mv2.jpg",
                "https://static.wixstatic.com/media/9f6194_72706eb589124443833e980b596c1981~mv2.jpg/v1/fill/w_548,h_308,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_72706eb589124443833e980b596c1981~mv2.jpg",
            ]),
            description: Some("Our Decoupling Mat is the perfect solution for any tiling project. With a waterproof design, this mat provides exceptional protection against moisture and mold. Measuring 322sqft and 1/8\" thick, it's ideal for large-scale installations and offers excellent sound reduction benefits. The mat's unique design also helps to prevent cracks and tile damage, making it a must-have for any tiling job.".to_string()),
            category: Some(Category::Underlayment),
            sku: Some("SE-005".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Waterproof design for exceptional protection against moisture and mold",
                "322 sq ft coverage\u{2014}ideal for large-scale installations",
                "1/8\" thick for optimal performance",
                "Excellent sound reduction benefits",
                "Helps prevent cracks and tile damage",
                "Must-have for any tiling job",
            ]),
            specifications: pairs(&[
                ("Category", "Underlayment"),
                ("Coverage", "322 sq ft"),
                ("Thickness", "1/8 in."),
                ("Sound reduction", "Yes"),
                ("Waterproof", "Yes"),
            ]),
            sizes: Vec::new(),
        },
        Product {
            id: ProductId::new(6),
            name: "Performance Sealant".to_string(),
            price: Price::from_cents(1899),
            label: None,
            image: "/static/images/products/performance-sealant.png".to_string(),
            images: Vec::new(),
            description: Some("Our waterproofing sealant is the perfect choice for sealing Essenti Boards. It provides superior protection against water damage and creates a strong, waterproof seal that will last for years. The sealant is easy to apply, dries quickly and is extremely durable. It is a great choice for any construction project that requires a reliable and long-lasting waterproof seal.".to_string()),
            category: Some(Category::ToolsMisc),
            sku: Some("SE-006".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Perfect for sealing Essenti Boards",
                "Superior protection against water damage",
                "Strong, waterproof seal that lasts for years",
                "Easy to apply and dries quickly",
                "Extremely durable",
                "Reliable and long-lasting for any construction project",
            ]),
            specifications: pairs(&[
                ("Category", "Tools/Miscellaneous"),
                ("Volume", "18.6 fl. oz. / 548 mL"),
                ("Waterproof", "Yes"),
                ("Ideal for", "Essenti Boards, joints and transitions"),
            ]),
            sizes: Vec::new(),
        },
        Product {
            id: ProductId::new(7),
            name: "Shower Curb".to_string(),
            price: Price::from_cents(5999),
            label: None,
            image: "https://static.wixstatic.com/media/9f6194_7c280ab375874acf8d44b5446ae45fcd~mv2.png/v1/fill/w_548,h_410,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_7c280ab375874acf8d44b5446ae45fcd~mv2.png".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_7c280ab375874acf8d44b5446ae45fcd~mv2.png/v1/fill/w_548,h_410,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_7c280ab375874acf8d44b5446ae45fcd~mv2.png",
            ]),
            description: Some("Our Shower Curb is the perfect addition to any bathroom renovation project. Made from waterproof materials, it ensures that water doesn't seep into your bathroom floor. It is also incredibly strong, meaning it can support heavy shower doors and resist cracking or breaking. We stock a range of sizes to cater for any shower space, making it an ideal choice for both commercial and residential bathroom projects. Upgrade your bathroom with our durable and functional Shower Curb today.".to_string()),
            category: Some(Category::ShowerKit),
            sku: Some("SE-007".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Waterproof materials prevent water from seeping into the bathroom floor",
                "Incredibly strong\u{2014}supports heavy shower doors",
                "Resists cracking or breaking",
                "Range of sizes to suit any shower space",
                "Ideal for commercial and residential projects",
                "Durable and functional",
            ]),
            specifications: pairs(&[
                ("Category", "Shower Kit"),
                ("Type", "Shower curb"),
                ("Material", "Waterproof composite"),
                ("Sizes", "Range of sizes available"),
                ("Use", "Commercial and residential"),
            ]),
            sizes: strings(&[
                "3 in x 3 in x 3 ft",
                "3 in x 3 in x 4 ft",
                "3 in x 3 in x 5 ft",
            ]),
        },
        Product {
            id: ProductId::new(8),
            name: "Waterproofing Membrane".to_string(),
            price: Price::from_cents(39999),
            label: None,
            image: "https://static.wixstatic.com/media/9f6194_b1b221abbb4b43edbb062db4552ced47~mv2.png/v1/fill/w_548,h_776,al_c,q_90,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_b1b221abbb4b43edbb062db4552ced47~mv2.png".to_string(),
            images: strings(&[
                "https://static.wixstatic.com/media/9f6194_b1b221abbb4b43edbb062db4552ced47~mv2.png/v1/fill/w_548,h_776,al_c,q_90,usm_0.66_1.00_0.01,enc_avif,quality_auto/9f6194_b1b221abbb4b43edbb062db4552ced47~mv2.png",
            ]),
            description: Some("Constructed from high-density polyethylene material and fortified with non-woven polypropylene layers on both sides, this waterproof membrane offers robust waterproofing and anti-seepage properties. Its primary function is to efficiently block the intrusion of water or moisture into surfaces like wooden floors, ceramic tiles, cement, or ceramic floors, effectively preventing the occurrence of tile or floor damage such as cracking. Provides waterproofing for both tiled shower walls and floors. Prevents water damage, which could otherwise result in the growth of mold and mildew. Well-suited for use in continuous-use steam rooms. The roll measures 3 feet and 3 inches in width by 98 feet and 5 inches in length. Covers an area of 323 square feet. Thickness of 20 mm, cutable by scissors. Simple and hassle-free installation.".to_string()),
            category: Some(Category::Underlayment),
            sku: Some("00103".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Robust waterproofing and anti-seepage properties",
                "Blocks water and moisture intrusion into wood, ceramic, cement, and ceramic floors",
                "Prevents tile and floor damage such as cracking",
                "Waterproofing for tiled shower walls and floors",
                "Prevents mold and mildew from water damage",
                "Suitable for continuous-use steam rooms",
                "Simple and hassle-free installation",
                "Cuttable with scissors",
            ]),
            specifications: pairs(&[
                ("Category", "Underlayment"),
                ("Material", "High-density polyethylene with non-woven polypropylene layers"),
                ("Roll dimensions", "3 ft 3 in (width) \u{d7} 98 ft 5 in (length)"),
                ("Coverage area", "323 sq ft"),
                ("Thickness", "20 mm"),
                ("Cuttable", "By scissors"),
            ]),
            sizes: strings(&["3.28' x 98.42'"]),
        },
        Product {
            id: ProductId::new(9),
            name: "Tile Leveling Clips".to_string(),
            price: Price::from_cents(2599),
            label: None,
            image: "/static/images/products/tile-leveling-system.png".to_string(),
            images: Vec::new(),
            description: Some("Our Tile Leveling System is the perfect solution for achieving a flawless tile installation. These tools ensure that your tiles are perfectly leveled and evenly spaced. Made from high-quality plastic, our Tile Leveling System is durable and easy to use, making it ideal for both DIYers and professional tile installers. Say goodbye to lippage and uneven tile installations with our Tile Leveling System.".to_string()),
            category: Some(Category::ToolsMisc),
            sku: Some("00212".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Perfectly leveled and evenly spaced tiles",
                "Flawless tile installation every time",
                "High-quality plastic\u{2014}durable and easy to use",
                "Ideal for DIYers and professional tile installers",
                "Eliminates lippage and uneven installations",
            ]),
            specifications: pairs(&[
                ("Category", "Tools/Miscellaneous"),
                ("Type", "Tile leveling clips"),
                ("Material", "High-quality plastic"),
            ]),
            sizes: strings(&["1/8\" 500/pcs", "1/16\" 500/pcs"]),
        },
        Product {
            id: ProductId::new(10),
            name: "Tile Leveling Wedge".to_string(),
            price: Price::from_cents(3499),
            label: None,
            image: "/static/images/products/tile-leveling-wedge.png".to_string(),
            images: Vec::new(),
            description: Some("Our Tile Leveling System is a must-have for anyone looking to achieve professional-looking tile installations. Designed to work perfectly with our spacers, this system ensures that your tiles are level and flush, giving you a seamless finish every time. Easy to use and highly effective, our Tile Leveling System is suitable for both DIY enthusiasts and professional tilers alike. Whether you're working on a small bathroom renovation or a large-scale tiling project, our leveling system is a reliable and efficient solution that will save you time and effort. Invest in this tool today and take your tiling game to the next level.".to_string()),
            category: Some(Category::ToolsMisc),
            sku: Some("SE-010".to_string()),
            brand: Some("Streamline Essentials".to_string()),
            features: strings(&[
                "Designed to work perfectly with our spacers",
                "Ensures tiles are level and flush for a seamless finish",
                "Easy to use and highly effective",
                "Suitable for DIY enthusiasts and professional tilers",
                "Reliable and efficient\u{2014}saves time and effort",
                "Ideal for small renovations or large-scale tiling projects",
            ]),
            specifications: pairs(&[
                ("Category", "Tools/Miscellaneous"),
                ("Type", "Tile leveling wedges"),
                ("Pieces per bag", "250"),
            ]),
            sizes: Vec::new(),
        },
    ])
}
