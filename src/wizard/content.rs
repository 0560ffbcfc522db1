//! Static screen content
//!
//! Every screen is described by a [`ScreenContent`] record holding
//! translation keys. One generic renderer in the terminal front end and one
//! in the CLI turn these records into text, so the seven career screens share
//! a single layout.

use crate::wizard::Step;
use rust_i18n::t;
use serde::Serialize;

/// Body of a content section
#[derive(Debug, Clone, Copy)]
pub enum Body {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
}

/// Heading plus body
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub body: Body,
}

/// Outbound resource link. The URL is opaque to the wizard.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// Content record for one screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenContent {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: &'static [Section],
    pub links: &'static [Link],
}

const NHS_JOBS: Link = Link {
    label: "link_nhs_jobs",
    url: "https://www.jobs.nhs.uk",
};
const HEALTH_CAREERS: Link = Link {
    label: "link_health_careers",
    url: "https://www.healthcareers.nhs.uk",
};
const CV_ADVICE: Link = Link {
    label: "link_cv_advice",
    url: "https://nationalcareers.service.gov.uk/careers-advice/cv-sections",
};
const NMC: Link = Link {
    label: "link_nmc",
    url: "https://www.nmc.org.uk",
};
const HCPC: Link = Link {
    label: "link_hcpc",
    url: "https://www.hcpc-uk.org",
};
const GMC: Link = Link {
    label: "link_gmc",
    url: "https://www.gmc-uk.org",
};
const GDC: Link = Link {
    label: "link_gdc",
    url: "https://www.gdc-uk.org",
};

const fn job_description(key: &'static str) -> Section {
    Section {
        heading: "heading_job_description",
        body: Body::Paragraph(key),
    }
}

const fn responsibilities(items: &'static [&'static str]) -> Section {
    Section {
        heading: "heading_responsibilities",
        body: Body::Bullets(items),
    }
}

const fn requirements(items: &'static [&'static str]) -> Section {
    Section {
        heading: "heading_requirements",
        body: Body::Bullets(items),
    }
}

const fn progression(key: &'static str) -> Section {
    Section {
        heading: "heading_progression",
        body: Body::Paragraph(key),
    }
}

static WELCOME: ScreenContent = ScreenContent {
    title: "welcome_title",
    description: "welcome_description",
    sections: &[
        Section {
            heading: "welcome_offers_heading",
            body: Body::Bullets(&["welcome_offer_info", "welcome_offer_support"]),
        },
        Section {
            heading: "welcome_audience_heading",
            body: Body::Paragraph("welcome_audience_body"),
        },
    ],
    links: &[],
};

static CATEGORIES: ScreenContent = ScreenContent {
    title: "categories_title",
    description: "categories_description",
    sections: &[],
    links: &[],
};

static ENTRY_HCA: ScreenContent = ScreenContent {
    title: "hca_title",
    description: "hca_description",
    sections: &[
        job_description("hca_summary"),
        responsibilities(&[
            "hca_duty_1",
            "hca_duty_2",
            "hca_duty_3",
            "hca_duty_4",
            "hca_duty_5",
        ]),
        requirements(&[
            "hca_req_1",
            "hca_req_2",
            "hca_req_3",
            "hca_req_4",
            "req_right_to_work",
        ]),
        progression("hca_progression"),
    ],
    links: &[NHS_JOBS, HEALTH_CAREERS, CV_ADVICE],
};

static ENTRY_DOMESTIC: ScreenContent = ScreenContent {
    title: "domestic_title",
    description: "domestic_description",
    sections: &[
        job_description("domestic_summary"),
        responsibilities(&[
            "domestic_duty_1",
            "domestic_duty_2",
            "domestic_duty_3",
            "domestic_duty_4",
            "domestic_duty_5",
        ]),
        requirements(&[
            "domestic_req_1",
            "domestic_req_2",
            "domestic_req_3",
            "domestic_req_4",
            "req_right_to_work",
        ]),
        progression("domestic_progression"),
    ],
    links: &[NHS_JOBS, CV_ADVICE],
};

static ENTRY_ADMIN: ScreenContent = ScreenContent {
    title: "admin_title",
    description: "admin_description",
    sections: &[
        job_description("admin_summary"),
        responsibilities(&[
            "admin_duty_1",
            "admin_duty_2",
            "admin_duty_3",
            "admin_duty_4",
            "admin_duty_5",
        ]),
        requirements(&[
            "admin_req_1",
            "admin_req_2",
            "admin_req_3",
            "admin_req_4",
            "req_right_to_work",
        ]),
        progression("admin_progression"),
    ],
    links: &[NHS_JOBS, HEALTH_CAREERS, CV_ADVICE],
};

static NURSING: ScreenContent = ScreenContent {
    title: "nursing_title",
    description: "nursing_description",
    sections: &[
        job_description("nursing_summary"),
        responsibilities(&[
            "nursing_duty_1",
            "nursing_duty_2",
            "nursing_duty_3",
            "nursing_duty_4",
            "nursing_duty_5",
        ]),
        requirements(&[
            "nursing_req_1",
            "nursing_req_2",
            "nursing_req_3",
            "nursing_req_4",
            "req_right_to_work",
        ]),
        progression("nursing_progression"),
    ],
    links: &[NMC, NHS_JOBS, HEALTH_CAREERS],
};

static AHP: ScreenContent = ScreenContent {
    title: "ahp_title",
    description: "ahp_description",
    sections: &[
        job_description("ahp_summary"),
        Section {
            heading: "heading_key_roles",
            body: Body::Bullets(&[
                "ahp_role_1",
                "ahp_role_2",
                "ahp_role_3",
                "ahp_role_4",
                "ahp_role_5",
            ]),
        },
        requirements(&[
            "ahp_req_1",
            "ahp_req_2",
            "ahp_req_3",
            "ahp_req_4",
            "req_right_to_work",
        ]),
        progression("ahp_progression"),
    ],
    links: &[HCPC, NHS_JOBS, HEALTH_CAREERS],
};

static MEDICAL: ScreenContent = ScreenContent {
    title: "medical_title",
    description: "medical_description",
    sections: &[
        job_description("medical_summary"),
        responsibilities(&[
            "medical_duty_1",
            "medical_duty_2",
            "medical_duty_3",
            "medical_duty_4",
            "medical_duty_5",
        ]),
        requirements(&[
            "medical_req_1",
            "medical_req_2",
            "medical_req_3",
            "medical_req_4",
            "req_right_to_work",
        ]),
        progression("medical_progression"),
    ],
    links: &[GMC, NHS_JOBS, HEALTH_CAREERS],
};

static DENTAL: ScreenContent = ScreenContent {
    title: "dental_title",
    description: "dental_description",
    sections: &[
        job_description("dental_summary"),
        responsibilities(&[
            "dental_duty_1",
            "dental_duty_2",
            "dental_duty_3",
            "dental_duty_4",
            "dental_duty_5",
        ]),
        requirements(&[
            "dental_req_1",
            "dental_req_2",
            "dental_req_3",
            "dental_req_4",
            "req_right_to_work",
        ]),
        progression("dental_progression"),
    ],
    links: &[GDC, NHS_JOBS, HEALTH_CAREERS],
};

static HELP_FORM: ScreenContent = ScreenContent {
    title: "help_title",
    description: "help_description",
    sections: &[
        Section {
            heading: "help_next_heading",
            body: Body::Paragraph("help_next_body"),
        },
        Section {
            heading: "help_consent_heading",
            body: Body::Paragraph("help_consent_body"),
        },
    ],
    links: &[],
};

/// Content record for a step
pub fn content(step: Step) -> &'static ScreenContent {
    match step {
        Step::Welcome => &WELCOME,
        Step::Categories => &CATEGORIES,
        Step::EntryHca => &ENTRY_HCA,
        Step::EntryDomestic => &ENTRY_DOMESTIC,
        Step::EntryAdmin => &ENTRY_ADMIN,
        Step::Nursing => &NURSING,
        Step::Ahp => &AHP,
        Step::Medical => &MEDICAL,
        Step::Dental => &DENTAL,
        Step::HelpForm => &HELP_FORM,
    }
}

impl ScreenContent {
    /// Every translation key this record refers to
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.title, self.description];
        for section in self.sections {
            keys.push(section.heading);
            match section.body {
                Body::Paragraph(key) => keys.push(key),
                Body::Bullets(items) => keys.extend_from_slice(items),
            }
        }
        keys.extend(self.links.iter().map(|l| l.label));
        keys
    }

    /// Resolve every key in the current locale
    pub fn resolve(&self, step: Step) -> RenderedScreen {
        RenderedScreen {
            step,
            title: t!(self.title).into_owned(),
            description: t!(self.description).into_owned(),
            sections: self
                .sections
                .iter()
                .map(|s| RenderedSection {
                    heading: t!(s.heading).into_owned(),
                    paragraph: match s.body {
                        Body::Paragraph(key) => Some(t!(key).into_owned()),
                        Body::Bullets(_) => None,
                    },
                    bullets: match s.body {
                        Body::Bullets(items) => items.iter().map(|k| t!(*k).into_owned()).collect(),
                        Body::Paragraph(_) => Vec::new(),
                    },
                })
                .collect(),
            links: self
                .links
                .iter()
                .map(|l| RenderedLink {
                    label: t!(l.label).into_owned(),
                    url: l.url.to_string(),
                })
                .collect(),
        }
    }
}

/// Screen content with all text resolved, for CLI and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RenderedScreen {
    pub step: Step,
    pub title: String,
    pub description: String,
    pub sections: Vec<RenderedSection>,
    pub links: Vec<RenderedLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedLink {
    pub label: String,
    pub url: String,
}
