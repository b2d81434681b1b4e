//! Static lab panels suggested alongside an assessment.
//!
//! Prices are displayed estimates for self-pay lab orders in the US, not computed values.

use serde::Serialize;

use super::domain::{HormoneSystem, SymptomSet};
use super::tables::TEST_PANEL_MATCH_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestPriority {
    Essential,
    Recommended,
    Optional,
}

impl TestPriority {
    pub const fn label(self) -> &'static str {
        match self {
            TestPriority::Essential => "essential",
            TestPriority::Recommended => "recommended",
            TestPriority::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    pub name: &'static str,
    pub priority: TestPriority,
    pub cost_range: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub reference_pmid: &'static str,
}

/// Named cluster of lab tests with aggregate cost estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecommendationGroup {
    pub key: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub trigger_symptoms: &'static [&'static str],
    /// Panels without a system are selected by symptom count alone.
    #[serde(skip)]
    pub system: Option<HormoneSystem>,
    pub tests: &'static [LabTest],
    pub total_cost_essential: &'static str,
    pub total_cost_all: &'static str,
}

impl TestRecommendationGroup {
    pub fn applies_to(&self, symptoms: &SymptomSet, systems_affected: &[HormoneSystem]) -> bool {
        symptoms.matches(self.trigger_symptoms) >= TEST_PANEL_MATCH_THRESHOLD
            || self
                .system
                .is_some_and(|system| systems_affected.contains(&system))
    }

    pub fn essential_tests(&self) -> impl Iterator<Item = &LabTest> {
        self.tests
            .iter()
            .filter(|test| test.priority == TestPriority::Essential)
    }
}

/// Read-only lookup over the lab panels.
#[derive(Debug, Clone, Copy)]
pub struct TestRecommendationCatalog {
    groups: &'static [TestRecommendationGroup],
}

impl Default for TestRecommendationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TestRecommendationCatalog {
    pub fn standard() -> Self {
        Self {
            groups: &STANDARD_GROUPS,
        }
    }

    pub fn with_groups(groups: &'static [TestRecommendationGroup]) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &'static [TestRecommendationGroup] {
        self.groups
    }

    pub fn group(&self, key: &str) -> Option<&'static TestRecommendationGroup> {
        self.groups.iter().find(|group| group.key == key)
    }

    /// Every panel whose trigger symptoms match at least twice or whose system was
    /// detected, in catalog order.
    pub fn recommended_tests(
        &self,
        symptoms: &SymptomSet,
        systems_affected: &[HormoneSystem],
    ) -> Vec<TestRecommendationGroup> {
        self.groups
            .iter()
            .filter(|group| group.applies_to(symptoms, systems_affected))
            .copied()
            .collect()
    }
}

const ATA_HYPOTHYROIDISM_GUIDELINE: &str = "25266247";
const ROTTERDAM_PCOS_CONSENSUS: &str = "14711538";
const ENDOCRINE_SOCIETY_TESTOSTERONE: &str = "29562364";
const ENDOCRINE_SOCIETY_ADRENAL: &str = "26760044";
const METABOLIC_SYNDROME_HARMONIZED: &str = "19805654";
const HOMA_MODEL_ASSESSMENT: &str = "3899825";

static STANDARD_GROUPS: [TestRecommendationGroup; 5] = [
    TestRecommendationGroup {
        key: "thyroid_dysfunction",
        name: "Thyroid Dysfunction",
        trigger_symptoms: &[
            "Unexplained weight gain or loss",
            "Fatigue or low energy",
            "Hair loss or thinning",
            "Cold intolerance",
            "Dry skin",
            "Brain fog or difficulty concentrating",
            "Depression or low mood",
            "Constipation",
        ],
        system: Some(HormoneSystem::Thyroid),
        tests: &THYROID_TESTS,
        total_cost_essential: "$55-$110",
        total_cost_all: "$215-$460",
    },
    TestRecommendationGroup {
        key: "pcos_reproductive",
        name: "PCOS / Reproductive Hormone Imbalance",
        trigger_symptoms: &[
            "Irregular menstrual cycles",
            "Heavy or painful periods",
            "PMS symptoms",
            "Fertility issues",
            "PCOS symptoms",
            "Acne or oily skin",
            "Excess facial or body hair",
            "Hot flashes or night sweats",
        ],
        system: Some(HormoneSystem::Reproductive),
        tests: &PCOS_TESTS,
        total_cost_essential: "$100-$220",
        total_cost_all: "$335-$760",
    },
    TestRecommendationGroup {
        key: "male_hypogonadism",
        name: "Male Hormone Deficiency",
        trigger_symptoms: &[
            "Low libido",
            "Erectile dysfunction",
            "Loss of muscle mass",
            "Increased belly fat",
            "Fatigue or low energy",
            "Mood swings",
            "Brain fog or difficulty concentrating",
        ],
        system: None,
        tests: &MALE_TESTS,
        total_cost_essential: "$75-$170",
        total_cost_all: "$260-$580",
    },
    TestRecommendationGroup {
        key: "adrenal_dysfunction",
        name: "Adrenal Dysfunction / Chronic Stress",
        trigger_symptoms: &[
            "Chronic stress or anxiety",
            "Difficulty waking up",
            "Afternoon energy crashes",
            "Salt cravings",
            "Difficulty handling stress",
            "Mood swings",
            "Fatigue or low energy",
            "Sleep problems",
        ],
        system: Some(HormoneSystem::Adrenal),
        tests: &ADRENAL_TESTS,
        total_cost_essential: "$70-$150",
        total_cost_all: "$220-$470",
    },
    TestRecommendationGroup {
        key: "metabolic_syndrome",
        name: "Metabolic Syndrome / Insulin Resistance",
        trigger_symptoms: &[
            "Blood sugar imbalances",
            "Increased belly fat",
            "Sugar cravings",
            "Difficulty losing weight",
            "Insulin resistance",
            "PCOS symptoms",
            "Afternoon energy crashes",
        ],
        system: Some(HormoneSystem::Metabolic),
        tests: &METABOLIC_TESTS,
        total_cost_essential: "$50-$140",
        total_cost_all: "$105-$270",
    },
];

static THYROID_TESTS: [LabTest; 6] = [
    LabTest {
        name: "TSH (Thyroid Stimulating Hormone)",
        priority: TestPriority::Essential,
        cost_range: "$25-$50",
        description: "Primary screening test for thyroid function",
        rationale: "Elevated TSH is the earliest marker of an underactive thyroid",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
    LabTest {
        name: "Free T4",
        priority: TestPriority::Essential,
        cost_range: "$30-$60",
        description: "Measures the unbound thyroid hormone available to tissues",
        rationale: "Confirms whether an abnormal TSH reflects actual hormone deficiency or excess",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
    LabTest {
        name: "Free T3",
        priority: TestPriority::Recommended,
        cost_range: "$30-$70",
        description: "Measures the active thyroid hormone",
        rationale: "Several EDCs impair T4-to-T3 conversion even when TSH looks normal",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
    LabTest {
        name: "TPO Antibodies",
        priority: TestPriority::Recommended,
        cost_range: "$40-$90",
        description: "Detects autoimmune thyroid disease (Hashimoto's)",
        rationale: "Autoimmunity is the most common cause of hypothyroidism and can precede hormone changes",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
    LabTest {
        name: "Thyroglobulin Antibodies",
        priority: TestPriority::Optional,
        cost_range: "$40-$90",
        description: "Secondary marker of thyroid autoimmunity",
        rationale: "Catches autoimmune cases that are TPO-negative",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
    LabTest {
        name: "Reverse T3",
        priority: TestPriority::Optional,
        cost_range: "$50-$100",
        description: "Inactive form of T3 produced under stress or illness",
        rationale: "Helps explain persistent symptoms when standard thyroid values are normal",
        reference_pmid: ATA_HYPOTHYROIDISM_GUIDELINE,
    },
];

static PCOS_TESTS: [LabTest; 7] = [
    LabTest {
        name: "Total & Free Testosterone",
        priority: TestPriority::Essential,
        cost_range: "$50-$120",
        description: "Measures androgen levels",
        rationale: "Elevated androgens are a core diagnostic criterion for PCOS",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "LH & FSH",
        priority: TestPriority::Essential,
        cost_range: "$50-$100",
        description: "Pituitary hormones that regulate ovulation",
        rationale: "An elevated LH:FSH ratio is common in PCOS and helps localize cycle problems",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "Estradiol",
        priority: TestPriority::Recommended,
        cost_range: "$40-$90",
        description: "Primary estrogen level",
        rationale: "Estrogen-mimicking chemicals can shift estrogen balance and cycle regularity",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "Progesterone (Day 21)",
        priority: TestPriority::Recommended,
        cost_range: "$35-$80",
        description: "Confirms whether ovulation occurred",
        rationale: "Low luteal progesterone explains heavy periods, PMS, and fertility issues",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "DHEA-S",
        priority: TestPriority::Recommended,
        cost_range: "$40-$80",
        description: "Adrenal androgen level",
        rationale: "Distinguishes adrenal from ovarian sources of excess androgens",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "Sex Hormone Binding Globulin (SHBG)",
        priority: TestPriority::Optional,
        cost_range: "$40-$90",
        description: "Protein that binds and inactivates sex hormones",
        rationale: "Low SHBG raises free androgen levels and tracks with insulin resistance",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
    LabTest {
        name: "Anti-Mullerian Hormone (AMH)",
        priority: TestPriority::Optional,
        cost_range: "$80-$200",
        description: "Marker of ovarian reserve",
        rationale: "Elevated AMH supports a PCOS diagnosis and informs fertility planning",
        reference_pmid: ROTTERDAM_PCOS_CONSENSUS,
    },
];

static MALE_TESTS: [LabTest; 7] = [
    LabTest {
        name: "Total Testosterone (morning draw)",
        priority: TestPriority::Essential,
        cost_range: "$35-$80",
        description: "Primary measure of male androgen status",
        rationale: "Diagnosis of low testosterone requires consistently low morning values",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "Free Testosterone",
        priority: TestPriority::Essential,
        cost_range: "$40-$90",
        description: "Unbound, biologically active testosterone",
        rationale: "Total testosterone can look normal when binding proteins are altered",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "LH & FSH",
        priority: TestPriority::Recommended,
        cost_range: "$50-$100",
        description: "Pituitary signals that drive testicular function",
        rationale: "Separates primary testicular failure from pituitary causes",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "Sex Hormone Binding Globulin (SHBG)",
        priority: TestPriority::Recommended,
        cost_range: "$40-$90",
        description: "Protein that binds testosterone in the blood",
        rationale: "Needed to interpret total testosterone in obesity, aging, and thyroid disease",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "Estradiol",
        priority: TestPriority::Recommended,
        cost_range: "$40-$90",
        description: "Estrogen level in men",
        rationale: "Excess aromatization and estrogenic chemicals can suppress testosterone",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "Prolactin",
        priority: TestPriority::Optional,
        cost_range: "$30-$70",
        description: "Pituitary hormone that suppresses reproductive function when elevated",
        rationale: "Rules out a pituitary cause of low libido and low testosterone",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
    LabTest {
        name: "PSA (Prostate Specific Antigen)",
        priority: TestPriority::Optional,
        cost_range: "$25-$60",
        description: "Prostate health screening marker",
        rationale: "Baseline required before any testosterone therapy is considered",
        reference_pmid: ENDOCRINE_SOCIETY_TESTOSTERONE,
    },
];

static ADRENAL_TESTS: [LabTest; 4] = [
    LabTest {
        name: "Morning Serum Cortisol",
        priority: TestPriority::Essential,
        cost_range: "$30-$70",
        description: "Cortisol level at its expected daily peak",
        rationale: "Screens for clinically significant adrenal insufficiency or excess",
        reference_pmid: ENDOCRINE_SOCIETY_ADRENAL,
    },
    LabTest {
        name: "DHEA-S",
        priority: TestPriority::Essential,
        cost_range: "$40-$80",
        description: "Adrenal androgen reserve",
        rationale: "Low DHEA-S commonly accompanies prolonged stress and adrenal strain",
        reference_pmid: ENDOCRINE_SOCIETY_ADRENAL,
    },
    LabTest {
        name: "4-Point Salivary Cortisol",
        priority: TestPriority::Recommended,
        cost_range: "$100-$200",
        description: "Cortisol rhythm across the day",
        rationale: "Shows flattened or inverted rhythms behind morning fatigue and afternoon crashes",
        reference_pmid: ENDOCRINE_SOCIETY_ADRENAL,
    },
    LabTest {
        name: "ACTH",
        priority: TestPriority::Optional,
        cost_range: "$50-$120",
        description: "Pituitary hormone that stimulates cortisol release",
        rationale: "Distinguishes adrenal from pituitary causes when cortisol is abnormal",
        reference_pmid: ENDOCRINE_SOCIETY_ADRENAL,
    },
];

static METABOLIC_TESTS: [LabTest; 5] = [
    LabTest {
        name: "Fasting Glucose",
        priority: TestPriority::Essential,
        cost_range: "$10-$30",
        description: "Blood sugar after an overnight fast",
        rationale: "Elevated fasting glucose is a defining criterion of metabolic syndrome",
        reference_pmid: METABOLIC_SYNDROME_HARMONIZED,
    },
    LabTest {
        name: "Hemoglobin A1c",
        priority: TestPriority::Essential,
        cost_range: "$20-$50",
        description: "Average blood sugar over roughly three months",
        rationale: "Identifies prediabetes that a single glucose reading can miss",
        reference_pmid: METABOLIC_SYNDROME_HARMONIZED,
    },
    LabTest {
        name: "Lipid Panel",
        priority: TestPriority::Essential,
        cost_range: "$20-$60",
        description: "Cholesterol and triglyceride levels",
        rationale: "High triglycerides and low HDL are core metabolic syndrome criteria",
        reference_pmid: METABOLIC_SYNDROME_HARMONIZED,
    },
    LabTest {
        name: "Fasting Insulin (HOMA-IR)",
        priority: TestPriority::Recommended,
        cost_range: "$30-$70",
        description: "Fasting insulin used to calculate insulin resistance",
        rationale: "Insulin resistance shows up years before glucose rises",
        reference_pmid: HOMA_MODEL_ASSESSMENT,
    },
    LabTest {
        name: "hs-CRP",
        priority: TestPriority::Optional,
        cost_range: "$25-$60",
        description: "High-sensitivity marker of systemic inflammation",
        rationale: "Chronic low-grade inflammation accompanies insulin resistance and EDC exposure",
        reference_pmid: METABOLIC_SYNDROME_HARMONIZED,
    },
];
