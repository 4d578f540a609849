mod portfolio;

pub use portfolio::{AboutSection, ContactSection, HeroSection, PortfolioPage, PublicationsSection, ResearchSection};
