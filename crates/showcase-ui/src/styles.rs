//! Stylesheet for the showcase page.
//!
//! Utility classes match the names used in the markup. Colors are CSS
//! variables switched by the `dark` class on `<html>`.

pub const SHOWCASE_STYLES: &str = r#"
:root {
  --background: #ffffff; --foreground: #0f172a;
  --card: #ffffff; --card-foreground: #0f172a;
  --primary: #1e293b; --primary-foreground: #f8fafc;
  --accent: #e0f2fe; --accent-foreground: #075985;
  --destructive: #dc2626; --destructive-foreground: #ffffff;
  --muted-foreground: #64748b; --border: #e2e8f0; --ring: #94a3b8;
}
html.dark {
  --background: #0b1120; --foreground: #e2e8f0;
  --card: #111827; --card-foreground: #e2e8f0;
  --primary: #e2e8f0; --primary-foreground: #0f172a;
  --accent: #0c4a6e; --accent-foreground: #e0f2fe;
  --destructive: #b91c1c; --destructive-foreground: #fef2f2;
  --muted-foreground: #94a3b8; --border: #1f2937; --ring: #475569;
}
*, *::before, *::after { box-sizing: border-box; border: 0 solid var(--border); }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: var(--background); color: var(--foreground); }
h1, h3, p, figure { margin: 0; }
a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; background: none; color: inherit; }
img { display: block; max-width: 100%; }

/* Layout */
.container { width: 100%; max-width: 1280px; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-7xl { max-width: 80rem; }
.w-full { width: 100%; }
.h-full { height: 100%; }
.min-h-screen { min-height: 100vh; }
.block { display: block; }
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.grid { display: grid; }
.flex-col { flex-direction: column; }
.flex-wrap { flex-wrap: wrap; }
.flex-1 { flex: 1 1 0%; }
.items-center { align-items: center; }
.justify-start { justify-content: flex-start; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.grid-cols-1 { grid-template-columns: repeat(1, minmax(0, 1fr)); }
.gap-2 { gap: 0.5rem; } .gap-3 { gap: 0.75rem; } .gap-4 { gap: 1rem; }
.gap-6 { gap: 1.5rem; } .gap-10 { gap: 2.5rem; }
.relative { position: relative; }
.absolute { position: absolute; }
.left-3 { left: 0.75rem; } .top-3 { top: 0.75rem; }
.overflow-hidden { overflow: hidden; }
.aspect-\[4\/3\] { aspect-ratio: 4 / 3; }
.object-cover { width: 100%; height: 100%; object-fit: cover; }
.pointer-events-none { pointer-events: none; }
.sr-only { position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border-width: 0; }

/* Spacing */
.p-2 { padding: 0.5rem; } .p-4 { padding: 1rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.px-2\.5 { padding-left: 0.625rem; padding-right: 0.625rem; }
.py-0\.5 { padding-top: 0.125rem; padding-bottom: 0.125rem; }
.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-4 { padding-top: 1rem; padding-bottom: 1rem; }
.py-6 { padding-top: 1.5rem; padding-bottom: 1.5rem; }
.py-10 { padding-top: 2.5rem; padding-bottom: 2.5rem; }
.pt-4 { padding-top: 1rem; }
.mt-2 { margin-top: 0.5rem; } .mt-3 { margin-top: 0.75rem; } .mt-auto { margin-top: auto; }
.mb-8 { margin-bottom: 2rem; } .ml-1 { margin-left: 0.25rem; }
.w-6 { width: 1.5rem; } .h-6 { height: 1.5rem; }

/* Typography */
.text-xs { font-size: 0.75rem; line-height: 1rem; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-base { font-size: 1rem; line-height: 1.5rem; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.text-2xl { font-size: 1.5rem; line-height: 2rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.font-medium { font-weight: 500; } .font-semibold { font-weight: 600; } .font-bold { font-weight: 700; }
.text-left { text-align: left; } .text-center { text-align: center; }
.line-through { text-decoration: line-through; }

/* Color */
.bg-card { background: var(--card); }
.bg-primary { background: var(--primary); }
.bg-accent { background: var(--accent); }
.bg-destructive { background: var(--destructive); }
.bg-yellow-200 { background: #fef08a; }
.text-foreground { color: var(--foreground); }
.text-card-foreground { color: var(--card-foreground); }
.text-primary { color: var(--primary); }
.text-primary-foreground { color: var(--primary-foreground); }
.text-accent-foreground\/90 { color: var(--accent-foreground); opacity: 0.9; }
.text-destructive-foreground { color: var(--destructive-foreground); }
.text-muted-foreground { color: var(--muted-foreground); }
.text-yellow-800 { color: #854d0e; }

/* Borders and effects */
.border { border-width: 1px; }
.border-t { border-top-width: 1px; }
.border-border { border-color: var(--border); }
.rounded { border-radius: 0.25rem; }
.rounded-md { border-radius: 0.375rem; }
.rounded-lg { border-radius: 0.5rem; }
.rounded-full { border-radius: 9999px; }
.shadow-sm { box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.hover\:shadow-lg:hover { box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1); }
.hover\:text-primary:hover { color: var(--primary); }
.transition-colors { transition: color 150ms ease, background-color 150ms ease; }
.group { transition: transform 300ms ease, box-shadow 300ms ease; }
.group:hover { transform: translateY(-4px); }
.opacity-60 { opacity: 0.6; } .opacity-90 { opacity: 0.9; }
.grayscale { filter: grayscale(100%); }
.cursor-not-allowed { cursor: not-allowed; }
.focus-visible\:outline-none:focus-visible { outline: 2px solid transparent; outline-offset: 2px; }
.focus-visible\:ring-2:focus-visible { box-shadow: 0 0 0 2px var(--background), 0 0 0 4px var(--ring); }

@media (min-width: 640px) {
  .sm\:flex-row { flex-direction: row; }
}
@media (min-width: 768px) {
  .md\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .md\:text-xl { font-size: 1.25rem; line-height: 1.75rem; }
}
@media (min-width: 1024px) {
  .lg\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
@media (min-width: 1280px) {
  .xl\:grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}
"#;
