//! The fixed reference data inserted at initialization time.
//!
//! Each plant carries its own Q&A entries so the insert path can key every
//! knowledge row off the rowid of the plant it was just given, instead of
//! hardcoding ids.

pub struct PlantSeed {
    pub common_name: &'static str,
    pub scientific_name: &'static str,
    pub growth_conditions: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub knowledge: &'static [QaSeed],
}

pub struct QaSeed {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PLANTS: &[PlantSeed] = &[
    PlantSeed {
        common_name: "Tulip",
        scientific_name: "Tulipa",
        growth_conditions: "Full sun, well-drained soil, moderate watering",
        description: "A spring-blooming perennial flower known for its vibrant colors and cup-shaped blooms.",
        image_url: "https://example.com/tulip.jpg",
        knowledge: &[
            QaSeed {
                question: "How do I plant tulip bulbs?",
                answer: "Plant tulip bulbs in fall, 4-6 inches deep, pointed end up, in well-drained soil. Space bulbs 4-6 inches apart.",
            },
            QaSeed {
                question: "When do tulips bloom?",
                answer: "Tulips typically bloom in spring, usually between March and May, depending on the variety and climate.",
            },
        ],
    },
    PlantSeed {
        common_name: "Sunflower",
        scientific_name: "Helianthus annuus",
        growth_conditions: "Full sun, fertile soil, regular watering",
        description: "A tall annual flower with large, bright yellow blooms that follow the sun.",
        image_url: "https://example.com/sunflower.jpg",
        knowledge: &[
            QaSeed {
                question: "How tall do sunflowers grow?",
                answer: "Sunflowers can grow anywhere from 3 to 15 feet tall, depending on the variety. Giant varieties can reach up to 15 feet!",
            },
            QaSeed {
                question: "How long do sunflowers take to grow?",
                answer: "Sunflowers typically take 80-120 days from planting to bloom, depending on the variety.",
            },
        ],
    },
    PlantSeed {
        common_name: "Rose",
        scientific_name: "Rosa",
        growth_conditions: "Partial to full sun, fertile soil, regular pruning",
        description: "A classic garden flower known for its beautiful blooms and sweet fragrance.",
        image_url: "https://example.com/rose.jpg",
        knowledge: &[
            QaSeed {
                question: "How often should I water roses?",
                answer: "Roses need deep watering 2-3 times per week. Water at the base of the plant to prevent leaf diseases.",
            },
            QaSeed {
                question: "When is the best time to prune roses?",
                answer: "Prune roses in late winter or early spring before new growth begins. Remove dead, damaged, or crossing branches.",
            },
        ],
    },
    PlantSeed {
        common_name: "Dandelion",
        scientific_name: "Taraxacum",
        growth_conditions: "Full sun, any soil, low maintenance",
        description: "A hardy plant with medicinal properties.",
        image_url: "https://example.com/dandelion.jpg",
        knowledge: &[QaSeed {
            question: "What are the benefits of Dandelions?",
            answer: "Dandelions have medicinal properties and can be used in teas and salads.",
        }],
    },
    PlantSeed {
        common_name: "Daisy",
        scientific_name: "Bellis perennis",
        growth_conditions: "Full sun, moist soil, regular watering",
        description: "A cheerful flower with white petals and a yellow center.",
        image_url: "https://example.com/daisy.jpg",
        knowledge: &[
            QaSeed {
                question: "Do Daisies require a lot of maintenance?",
                answer: "Daisies are low-maintenance and thrive in most conditions.",
            },
            QaSeed {
                question: "What are some common types of daisies?",
                answer: "Common types of daisies include Shasta daisies, English daisies, and Gerbera daisies.",
            },
            QaSeed {
                question: "Can daisies be grown indoors?",
                answer: "While daisies can be grown indoors, they prefer outdoor conditions and may not thrive indoors for extended periods.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_has_expected_shape() {
        assert_eq!(PLANTS.len(), 5);
        let total_qa: usize = PLANTS.iter().map(|p| p.knowledge.len()).sum();
        assert_eq!(total_qa, 10);
    }

    #[test]
    fn common_names_are_unique() {
        let mut names: Vec<&str> = PLANTS.iter().map(|p| p.common_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PLANTS.len());
    }

    #[test]
    fn every_plant_has_at_least_one_qa() {
        for plant in PLANTS {
            assert!(
                !plant.knowledge.is_empty(),
                "{} has no knowledge entries",
                plant.common_name
            );
        }
    }

    #[test]
    fn tulip_is_tulipa() {
        let tulip = PLANTS
            .iter()
            .find(|p| p.common_name == "Tulip")
            .expect("Tulip missing from seed set");
        assert_eq!(tulip.scientific_name, "Tulipa");
    }
}
