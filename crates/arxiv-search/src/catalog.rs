//! Curated arXiv category catalog.
//!
//! Static reference data: subject codes grouped by domain, shown as
//! checkboxes in the advanced search panel.

/// A single arXiv subject category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// arXiv code, e.g. `cs.LG`.
    pub code: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// A group of categories under one domain heading.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    /// Domain heading, e.g. "Computer Science".
    pub name: &'static str,
    /// Categories in display order.
    pub categories: &'static [Category],
}

const fn cat(code: &'static str, label: &'static str) -> Category {
    Category { code, label }
}

/// All domains, in display order.
pub static DOMAINS: &[Domain] = &[
    Domain {
        name: "Computer Science",
        categories: &[
            cat("cs.AI", "Artificial Intelligence"),
            cat("cs.LG", "Machine Learning"),
            cat("cs.CV", "Computer Vision"),
            cat("cs.CL", "Natural Language Processing"),
            cat("cs.RO", "Robotics"),
            cat("cs.DB", "Databases"),
            cat("cs.DS", "Algorithms & Data Structures"),
            cat("cs.CR", "Security & Cryptography"),
            cat("cs.OS", "Operating Systems"),
            cat("cs.SE", "Software Engineering"),
        ],
    },
    Domain {
        name: "Mathematics",
        categories: &[
            cat("math.CO", "Combinatorics"),
            cat("math.NT", "Number Theory"),
            cat("math.AG", "Algebraic Geometry"),
            cat("math.PR", "Probability"),
            cat("math.OC", "Optimization & Control"),
            cat("math.ST", "Statistics Theory"),
        ],
    },
    Domain {
        name: "Statistics",
        categories: &[
            cat("stat.ML", "Machine Learning"),
            cat("stat.TH", "Theory"),
            cat("stat.ME", "Methodology"),
            cat("stat.AP", "Applications"),
        ],
    },
    Domain {
        name: "Physics",
        categories: &[
            cat("quant-ph", "Quantum Physics"),
            cat("hep-th", "High Energy Theory"),
            cat("cond-mat.stat-mech", "Statistical Mechanics"),
            cat("astro-ph.CO", "Cosmology"),
            cat("gr-qc", "General Relativity"),
        ],
    },
];

/// Iterate over every category in the catalog.
pub fn all_categories() -> impl Iterator<Item = &'static Category> {
    DOMAINS.iter().flat_map(|d| d.categories.iter())
}

/// Look up a category by code.
#[must_use]
pub fn find(code: &str) -> Option<&'static Category> {
    all_categories().find(|c| c.code == code)
}

/// Check if a code belongs to the catalog.
#[must_use]
pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}
