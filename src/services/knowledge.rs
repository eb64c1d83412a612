// src/services/knowledge.rs
//! Static reference data interpolated into the reply templates.

use std::fmt;

/// A named entry with a one-line explanation, rendered as `Name - detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub detail: &'static str,
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.detail)
    }
}

#[derive(Debug)]
pub struct KnowledgeBase {
    pub trending: &'static [&'static str],
    pub suppliers: &'static [Descriptor],
    pub niches: &'static [Descriptor],
}

pub static KNOWLEDGE: KnowledgeBase = KnowledgeBase {
    trending: &[
        "Wireless earbuds",
        "Fitness resistance bands",
        "LED strip lights",
        "Phone accessories",
        "Pet grooming tools",
        "Smart home devices",
        "Portable blenders",
        "Yoga mats",
        "Gaming accessories",
        "Skincare tools",
    ],
    suppliers: &[
        Descriptor {
            name: "AliExpress",
            detail: "Global marketplace with no minimum orders",
        },
        Descriptor {
            name: "DHgate",
            detail: "Wholesale platform for bulk orders",
        },
        Descriptor {
            name: "CJDropshipping",
            detail: "US warehouses for fast shipping",
        },
        Descriptor {
            name: "Spocket",
            detail: "US/EU suppliers with faster delivery",
        },
        Descriptor {
            name: "Wholesale2B",
            detail: "Automated dropshipping platform",
        },
        Descriptor {
            name: "Modalyst",
            detail: "Curated high-quality suppliers",
        },
    ],
    niches: &[
        Descriptor {
            name: "Health & Fitness",
            detail: "High demand, repeat customers",
        },
        Descriptor {
            name: "Tech Accessories",
            detail: "Low shipping cost, high margins",
        },
        Descriptor {
            name: "Home & Garden",
            detail: "Growing market, diverse products",
        },
        Descriptor {
            name: "Pet Products",
            detail: "Loyal customer base, emotional purchases",
        },
        Descriptor {
            name: "Beauty & Personal Care",
            detail: "Trending, social media friendly",
        },
        Descriptor {
            name: "Eco-Friendly Products",
            detail: "Rising trend, premium pricing",
        },
    ],
};
