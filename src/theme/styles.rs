//! Global CSS styles for Stride.
//!
//! The badge gradient/glow class names here mirror the strings produced by
//! `stride_core::display`; a badge element carries its resolved classes and
//! picks up the matching rules below.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night-black: #0b0d10;
  --night-lighter: #12151a;
  --night-border: #1f242c;

  /* EMBER (Badges, Highlights) */
  --amber: #f59e0b;
  --amber-glow: rgba(245, 158, 11, 0.45);
  --orange: #fb923c;
  --orange-glow: rgba(251, 146, 60, 0.45);
  --yellow: #fde047;
  --yellow-glow: rgba(253, 224, 71, 0.45);
  --red: #ef4444;
  --red-glow: rgba(239, 68, 68, 0.45);

  /* PACE GREEN (Primary, Progress) */
  --emerald: #34d399;
  --emerald-glow: rgba(52, 211, 153, 0.45);

  /* TEXT */
  --text-primary: #f4f4f5;
  --text-secondary: rgba(244, 244, 245, 0.7);
  --text-muted: rgba(244, 244, 245, 0.45);

  /* Typography */
  --font-display: 'Archivo', 'Helvetica Neue', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--night-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 700;
  letter-spacing: 0.04em;
  text-transform: uppercase;
}

.tagline {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

/* === Landing === */
.landing {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 1.25rem;
  text-align: center;
  padding: 2rem;
}

.btn-enter {
  font-family: var(--font-display);
  font-size: 1rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--night-black);
  background: var(--emerald);
  border: none;
  border-radius: 999px;
  padding: 0.85rem 2.5rem;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-enter:hover {
  box-shadow: 0 0 24px var(--emerald-glow);
}

/* === Achievements page === */
.achievements-page {
  max-width: 640px;
  margin: 0 auto;
  padding: 2rem 1.25rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.achievements-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.achievements-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: 1rem;
}

/* === Bordered panel === */
.bordered-panel {
  position: relative;
  border: 1px solid var(--night-border);
  border-radius: 12px;
  background: var(--night-lighter);
  padding: 1.25rem;
}

.bordered-panel__corner {
  position: absolute;
  width: 14px;
  height: 14px;
  border-color: var(--emerald);
  border-style: solid;
}

.bordered-panel__corner--tl { top: -1px; left: -1px; border-width: 2px 0 0 2px; border-radius: 12px 0 0 0; }
.bordered-panel__corner--tr { top: -1px; right: -1px; border-width: 2px 2px 0 0; border-radius: 0 12px 0 0; }
.bordered-panel__corner--bl { bottom: -1px; left: -1px; border-width: 0 0 2px 2px; border-radius: 0 0 0 12px; }
.bordered-panel__corner--br { bottom: -1px; right: -1px; border-width: 0 2px 2px 0; border-radius: 0 0 12px 0; }

.bordered-panel__title {
  font-family: var(--font-display);
  font-size: 0.8rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

/* === Achievement card === */
.achievement-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.6rem;
  text-align: center;
  padding: 1rem 0.75rem;
  border-radius: 10px;
  transition: background var(--transition-fast);
}

.achievement-card.interactive {
  cursor: pointer;
}

.achievement-card.interactive:hover {
  background: rgba(244, 244, 245, 0.04);
}

.achievement-card--locked .achievement-badge {
  filter: grayscale(1);
  opacity: 0.35;
  box-shadow: none;
}

.achievement-card__name {
  font-family: var(--font-display);
  font-size: 0.9rem;
  font-weight: 600;
}

.achievement-card--locked .achievement-card__name {
  color: var(--text-muted);
}

.achievement-card__hint {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.achievement-card__date {
  font-size: 0.72rem;
  color: var(--text-secondary);
}

.achievement-card__chip {
  font-size: 0.68rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-secondary);
  border: 1px solid var(--night-border);
  border-radius: 999px;
  padding: 0.1rem 0.6rem;
}

/* === Badge circle === */
.achievement-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 72px;
  height: 72px;
  border-radius: 50%;
  font-size: 1.6rem;
  color: var(--night-black);
}

/* Gradient classes (keys from the badge-color table) */
.achievement-badge.from-yellow-400.to-amber-600 {
  background: linear-gradient(135deg, #facc15, #d97706);
}

.achievement-badge.from-orange-400.to-red-500 {
  background: linear-gradient(135deg, #fb923c, #ef4444);
}

.achievement-badge.from-yellow-300.to-yellow-500 {
  background: linear-gradient(135deg, #fde047, #eab308);
}

.achievement-badge.from-red-500.to-rose-600 {
  background: linear-gradient(135deg, #ef4444, #e11d48);
}

.achievement-badge.from-emerald-400.to-teal-600 {
  background: linear-gradient(135deg, #34d399, #0d9488);
}

/* Glow classes (same key set as the gradients) */
.achievement-badge.glow-amber { box-shadow: 0 0 22px var(--amber-glow); }
.achievement-badge.glow-orange { box-shadow: 0 0 22px var(--orange-glow); }
.achievement-badge.glow-yellow { box-shadow: 0 0 22px var(--yellow-glow); }
.achievement-badge.glow-red { box-shadow: 0 0 22px var(--red-glow); }
.achievement-badge.glow-emerald { box-shadow: 0 0 22px var(--emerald-glow); }
"#;
