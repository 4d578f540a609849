//! Static site content: who the page is about, where it links to, and the
//! tables the sections are rendered from.

/// One entry of the fixed navigation bar. `id` doubles as the target section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// In-page anchor for this link, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchTopic {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub link: &'static str,
}

/// Piece of a paragraph of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    Plain(&'static str),
    Strong(&'static str),
}

#[derive(Debug)]
pub struct ContactLinks {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Paths relative to the site root, served from `public/`.
#[derive(Debug)]
pub struct Assets {
    pub portrait: &'static str,
    pub cv: &'static str,
}

#[derive(Debug)]
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub about: &'static [&'static [Run]],
    pub contact_blurb: &'static str,
    pub assets: Assets,
    pub contact: ContactLinks,
    pub nav: &'static [NavLink],
    pub research: &'static [ResearchTopic],
    pub publications: &'static [Publication],
}

pub static CONFIG: SiteConfig = SiteConfig {
    name: "Bharat Kharpuse",
    tagline: "Experimental Nuclear Physicist | Data Analyst | Developer",
    description: "Bharat Kharpuse - experimental nuclear physicist working on gamma-ray spectroscopy, \
                  fusion-evaporation reactions and detector development.",
    about: &[
        &[Run::Plain(
            "I am passionate about unraveling the intricate structure of atomic nuclei and advancing detector \
             technologies. My research spans gamma\u{2011}ray spectroscopy, fusion\u{2011}evaporation reactions, \
             and shell\u{2011}model calculations.",
        )],
        &[
            Run::Plain("Currently, I contribute to the "),
            Run::Strong("FOOT"),
            Run::Plain(
                " experiment at INFN\u{00A0}Torino, focusing on BGO calorimeter response and neutron detection \
                 techniques.",
            ),
        ],
    ],
    contact_blurb: "I\u{2019}m open to collaboration and discussion \u{2013} feel free to reach out!",
    assets: Assets {
        portrait: "bharat_imag.jpg",
        cv: "Bharat_CVU.pdf",
    },
    contact: ContactLinks {
        email: "bharatkharpuse@gmail.com",
        linkedin: "https://www.linkedin.com/in/bharat-pawar-369728161/",
        github: "https://github.com/BharatKharpuse",
    },
    nav: &[
        NavLink { id: "hero", label: "Home" },
        NavLink { id: "about", label: "About" },
        NavLink { id: "research", label: "Research" },
        NavLink { id: "publications", label: "Publications" },
        NavLink { id: "contact", label: "Contact" },
    ],
    research: &[
        ResearchTopic {
            title: "Nuclear Structure",
            description: "Investigating the arrangement and interaction of nucleons within exotic nuclei using \
                          high\u{2011}resolution HPGe arrays.",
        },
        ResearchTopic {
            title: "Gamma\u{2011}ray Spectroscopy",
            description: "Extracting level schemes and transition rates through in\u{2011}beam and offline \
                          measurement techniques.",
        },
        ResearchTopic {
            title: "Fusion\u{2011}Evaporation Reactions",
            description: "Studying reaction dynamics and residue production to inform radio\u{2011}nuclide \
                          applications.",
        },
        ResearchTopic {
            title: "Shell Model",
            description: "Performing large\u{2011}scale calculations (NuShellX, KSHELL) to interpret experimental \
                          observables.",
        },
    ],
    publications: &[
        Publication {
            title: "In\u{2011}beam \u{03B3}\u{2011}ray spectroscopy of 69Ge",
            link: "https://inspirehep.net/files/f4641f4fd6aeb3f8e24a72537413a0c5",
        },
        Publication {
            title: "Yield distribution of fusion\u{2011}evaporation reaction 28Si + 48Ti",
            link: "https://inspirehep.net/files/7ea5acd798e644d724b427da46ae0ead",
        },
        Publication {
            title: "Coexisting Features in 68Zn",
            link: "https://inspirehep.net/files/c187de064ddf8cd540b7c80dae7f613e",
        },
        Publication {
            title: "Low\u{2011}lying level sequences in 76As",
            link: "https://inspirehep.net/files/c20ac04331f57b46e0c9ccd001f724b2",
        },
    ],
};
