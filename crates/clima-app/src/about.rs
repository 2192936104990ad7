//! Static application information (the "about" surface).

/// Application metadata shown by the about surface.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub weather_api: &'static str,
    pub backend: &'static str,
    pub technologies: &'static [&'static str],
}

pub const APP_INFO: AppInfo = AppInfo {
    name: "Climate Wardrobe Buddy",
    tagline: "Seu assistente pessoal de clima e guarda-roupa",
    description: "Busque a previsão do tempo da sua cidade e receba sugestões \
                  de roupas baseadas na temperatura e nas condições meteorológicas atuais.",
    weather_api: "OpenWeatherMap: dados meteorológicos em tempo real, incluindo \
                  temperatura, umidade, velocidade do vento e condições climáticas.",
    backend: "Autenticação de usuários e histórico de pesquisas de clima.",
    technologies: &[
        "Rust",
        "Tokio",
        "Reqwest",
        "SQLite",
        "OpenWeatherMap API",
    ],
};

impl AppInfo {
    /// Render as display text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n{}\n\n", self.name, self.tagline));
        out.push_str(&format!("{}\n\n", self.description));
        out.push_str(&format!("API utilizada\n{}\n\n", self.weather_api));
        out.push_str(&format!("Backend\n{}\n\n", self.backend));
        out.push_str("Tecnologias\n");
        for tech in self.technologies {
            out.push_str(&format!("• {tech}\n"));
        }
        out
    }
}
