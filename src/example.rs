use crate::models::{PageContent, WelcomeResponse};

/// The example applications this crate can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    /// REST server answering JSON on both routes.
    ExpressApi,
    /// Controller-style API server answering JSON on both routes.
    NestApi,
    /// Server-rendered page app.
    NextApp,
    /// Client-side routing page app.
    ReactRouterApp,
}

/// What the root route serves for an example.
#[derive(Debug, Clone, PartialEq)]
pub enum RootContent {
    Json(WelcomeResponse),
    Page(PageContent),
}

const NEXT_PAGE: PageContent = PageContent {
    title: "Next.js ShipNode Example",
    description: "Deployed with ShipNode",
    heading: "Welcome to Next.js with ShipNode",
    summary: "This is a server-side rendered application deployed with ShipNode.",
    features: &[
        "Server-side rendering",
        "React Server Components",
        "Optimized for production",
    ],
};

const REACT_ROUTER_PAGE: PageContent = PageContent {
    title: "React Router ShipNode Example",
    description: "Deployed with ShipNode",
    heading: "Welcome to React Router v7 with ShipNode",
    summary: "This is a single-page application deployed with ShipNode.",
    features: &[
        "Client-side routing",
        "React Router v7",
        "Vite for fast development",
        "Static frontend deployment",
    ],
};

impl Example {
    pub const ALL: [Example; 4] = [
        Example::ExpressApi,
        Example::NestApi,
        Example::NextApp,
        Example::ReactRouterApp,
    ];

    /// Framework name used in the welcome message and the startup log line.
    pub fn framework(self) -> &'static str {
        match self {
            Example::ExpressApi => "Express",
            Example::NestApi => "NestJS",
            Example::NextApp => "Next.js",
            Example::ReactRouterApp => "React Router",
        }
    }

    pub fn root(self) -> RootContent {
        match self {
            Example::ExpressApi | Example::NestApi => {
                RootContent::Json(WelcomeResponse::for_framework(self.framework()))
            }
            Example::NextApp => RootContent::Page(NEXT_PAGE),
            Example::ReactRouterApp => RootContent::Page(REACT_ROUTER_PAGE),
        }
    }
}
