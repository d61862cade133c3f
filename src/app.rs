//! Application state and logic.

use crate::chart::{ChartSpec, ChartViewState};
use crate::session::Session;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Collected session data.
    pub session: Session,
    /// Chart description built from the session.
    pub spec: ChartSpec,
    /// Chart view state (probe cursor).
    pub view: ChartViewState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance from a collected session.
    pub fn new(session: Session) -> Self {
        let spec = ChartSpec::from_session(&session);
        let status = if session.is_empty() {
            "Nenhuma amostra coletada".to_string()
        } else {
            format!("{} amostras coletadas", session.len())
        };

        Self {
            session,
            spec,
            view: ChartViewState::new(),
            status,
            theme: Theme::GruvboxDark,
        }
    }

    /// Move the probe cursor one sample left.
    pub fn probe_left(&mut self) {
        self.view.cursor_left();
        self.show_probe();
    }

    /// Move the probe cursor one sample right.
    pub fn probe_right(&mut self) {
        self.view.cursor_right(self.session.len());
        self.show_probe();
    }

    /// Jump the probe cursor to the first sample.
    pub fn probe_first(&mut self) {
        self.view.cursor_first();
        self.show_probe();
    }

    /// Jump the probe cursor to the last sample.
    pub fn probe_last(&mut self) {
        self.view.cursor_last(self.session.len());
        self.show_probe();
    }

    /// Show the full-precision readout of the probed sample.
    fn show_probe(&mut self) {
        tracing::debug!(cursor = self.view.cursor, "probe moved");
        match self.session.samples.get(self.view.cursor) {
            Some(sample) => {
                self.status = format!(
                    "{} vértices: {} ms ({}/{})",
                    sample.vertices,
                    sample.time_ms,
                    self.view.cursor + 1,
                    self.session.len()
                );
            }
            None => {
                self.status = "Nenhuma amostra coletada".to_string();
            }
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Tema: {}", self.theme.name());
    }

    /// Copy the collected samples to the clipboard as TSV.
    pub fn yank_samples(&mut self) {
        match util::copy_samples(&self.session.samples) {
            Ok(()) => {
                self.status = format!("{} amostras copiadas!", self.session.len());
                tracing::debug!("samples copied to clipboard");
            }
            Err(e) => {
                self.status = format!("Falha ao copiar: {}", e);
                tracing::error!("clipboard copy failed: {}", e);
            }
        }
    }

    /// Show the one-line key summary.
    pub fn show_help(&mut self) {
        self.status = "Ajuda: q/Esc=sair, ←/→=amostra, g/G=primeira/última, T=tema, y=copiar"
            .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Sample;

    fn reference_app() -> App {
        App::new(Session::new(
            3,
            vec![
                Sample::new(4, 12.7),
                Sample::new(6, 45.0),
                Sample::new(8, 90.3),
            ],
        ))
    }

    #[test]
    fn probe_readout_keeps_full_precision() {
        let mut app = reference_app();
        app.probe_right();
        assert_eq!(app.status, "6 vértices: 45 ms (2/3)");
        app.probe_right();
        assert_eq!(app.status, "8 vértices: 90.3 ms (3/3)");
        app.probe_right();
        assert_eq!(app.status, "8 vértices: 90.3 ms (3/3)");
        app.probe_first();
        assert_eq!(app.status, "4 vértices: 12.7 ms (1/3)");
    }

    #[test]
    fn probe_on_an_empty_session_reports_no_samples() {
        let mut app = App::new(Session::new(1, Vec::new()));
        app.probe_right();
        assert_eq!(app.status, "Nenhuma amostra coletada");
    }

    #[test]
    fn theme_cycles_between_gruvbox_variants() {
        let mut app = reference_app();
        assert_eq!(app.theme, Theme::GruvboxDark);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Tema: Gruvbox Light");
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxDark);
    }
}
