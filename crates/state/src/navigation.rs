use tarefas_core::routes::Route;

/// Router boundary: accepts navigation intents produced by the managers.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// Navigator that only records where it was sent.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    visited: Vec<Route>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Navigator for NavigationHistory {
    fn go_to(&mut self, route: Route) {
        tracing::debug!(path = %route, "Navigating");
        self.visited.push(route);
    }
}
