//! Server-rendered pages.
//!
//! Both pages are static HTML shells; their selectors and charts are
//! populated by a small script that calls the JSON API on load and on
//! every input change, re-rendering with `Plotly.react`. Selector ids
//! and the visual styling follow the FGE site: dark green navbar, tan
//! footer, wine-colored action buttons.

use actix_web::HttpResponse;

/// `GET /` (and the fallback for unknown paths)
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_home())
}

/// `GET /estadisticas`
pub async fn estadisticas() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_estadisticas())
}

fn render_home() -> String {
    page_shell(
        "Fiscalía General del Estado de Campeche",
        HOME_BODY,
        HOME_SCRIPT,
    )
}

fn render_estadisticas() -> String {
    page_shell(
        "Estadísticas — Fiscalía General del Estado de Campeche",
        ESTADISTICAS_BODY,
        ESTADISTICAS_SCRIPT,
    )
}

/// Wraps page content in the shared document shell: head, navbar, footer
/// and the script block.
fn page_shell(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>{css}</style>
</head>
<body>
    {navbar}
    <main class="container">
{body}
    </main>
    {footer}
    <script>{shared_js}{script}</script>
</body>
</html>"#,
        css = inline_css(),
        navbar = nav_bar(),
        footer = page_footer(),
        shared_js = SHARED_JS,
    )
}

fn nav_bar() -> &'static str {
    r#"<nav class="navbar">
        <img src="/assets/LOGO_FGECAM.png" alt="FGE Campeche" height="70">
        <div class="nav-links">
            <a href="/">Inicio</a>
            <a href="/estadisticas">Estadísticas</a>
        </div>
    </nav>"#
}

fn page_footer() -> &'static str {
    r#"<footer class="footer">
        <img src="/assets/JAGUAR.png" alt="" height="70">
        <div class="social-links">
            <a href="https://www.facebook.com/GobiernoDeCampeche/?locale=es_LA">Facebook</a>
            <a href="https://x.com/ucscampeche?lang=es">Twitter</a>
            <a href="https://www.instagram.com/gobiernodecampeche/">Instagram</a>
            <a href="https://www.tiktok.com/@gobiernodetodos">TikTok</a>
        </div>
    </footer>"#
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: 'Quattro Slab', serif;
    background-color: #F9F9F9;
    margin: 0;
    padding: 0;
}
.navbar {
    background-color: #10312B;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 5px 20px;
}
.nav-links a {
    color: white;
    text-decoration: none;
    margin-left: 20px;
}
.footer {
    background-color: #AB9470;
    color: white;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 8px 20px;
    margin-top: 20px;
}
.social-links a {
    color: white;
    text-decoration: none;
    margin-left: 15px;
}
.container {
    padding: 10px 20px;
}
.page-title {
    color: #53565A;
    font-size: 36px;
    font-weight: bold;
    margin-top: 20px;
    text-align: center;
}
.panel-title {
    text-align: center;
}
.row {
    display: flex;
    gap: 20px;
    margin-bottom: 15px;
}
.col-wide { flex: 2; }
.col-narrow { flex: 1; }
.col { flex: 1; }
select {
    width: 100%;
    margin-top: 20px;
    padding: 6px;
    font-family: 'Quattro Slab', serif;
}
.action-btn {
    margin-top: 20px;
    background-color: #9F2241;
    color: white;
    border-radius: 15px;
    border: none;
    padding: 10px 15px;
    font-family: 'Quattro Slab', serif;
    cursor: pointer;
}
.modalidad-btn {
    margin: 5px;
    background-color: #9F2241;
    color: white;
    border-radius: 15px;
    border: none;
    padding: 10px 20px;
    font-family: 'Quattro Slab', serif;
    cursor: pointer;
}
.modalidad-btn.active {
    background-color: #235B4E;
}
.hidden { display: none; }
"#
}

/// Fetch helpers shared by both pages.
const SHARED_JS: &str = r"
async function fetchJson(url) {
    const response = await fetch(url);
    return response.json();
}

function query(params) {
    const search = new URLSearchParams();
    for (const [key, value] of Object.entries(params)) {
        if (value !== null && value !== undefined && value !== '') {
            search.set(key, value);
        }
    }
    return search.toString();
}

function fillSelect(select, options, placeholder, selected) {
    select.innerHTML = '';
    const prompt = document.createElement('option');
    prompt.value = '';
    prompt.textContent = placeholder;
    select.appendChild(prompt);
    for (const value of options) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = value;
        select.appendChild(option);
    }
    select.value = selected ?? '';
}

function capitalize(text) {
    return text.charAt(0).toUpperCase() + text.slice(1).toLowerCase();
}
";

const HOME_BODY: &str = r#"        <div class="row">
            <div class="col">
                <h1 class="page-title">Fiscalía General del Estado de Campeche</h1>
            </div>
        </div>
        <div class="row">
            <div class="col-wide">
                <h3 class="panel-title">Mapa de los Municipios de Campeche</h3>
                <div id="mapa-campeche"></div>
            </div>
            <div class="col-narrow">
                <h3 class="panel-title">Seleccione un año y un tipo de delito para ver las estadísticas</h3>
                <select id="year-dropdown"></select>
                <select id="delito-dropdown"></select>
                <div id="grafica-estadisticas" class="hidden"></div>
                <button id="otra-seleccion-btn" class="action-btn">Otra Selección</button>
                <select id="year-dropdown-otra" class="hidden"></select>
            </div>
        </div>
        <div class="row">
            <div class="col-wide"><div id="mapa-campeche-otra" class="hidden"></div></div>
            <div class="col-narrow"><div id="grafica-estadisticas-otra" class="hidden"></div></div>
        </div>
"#;

const HOME_SCRIPT: &str = r"
const yearSelect = document.getElementById('year-dropdown');
const delitoSelect = document.getElementById('delito-dropdown');
const otherYearSelect = document.getElementById('year-dropdown-otra');
const otherButton = document.getElementById('otra-seleccion-btn');
let comparing = false;

function renderFigures(figures, mapId, barsId) {
    const map = document.getElementById(mapId);
    Plotly.react(map, figures.map.data, figures.map.layout);
    const bars = document.getElementById(barsId);
    if (figures.bars) {
        bars.classList.remove('hidden');
        Plotly.react(bars, figures.bars.data, figures.bars.layout);
    } else {
        bars.classList.add('hidden');
    }
}

async function refreshPrimary() {
    const figures = await fetchJson('/api/home/figures?' + query({
        year: yearSelect.value,
        crimeType: delitoSelect.value,
    }));
    renderFigures(figures, 'mapa-campeche', 'grafica-estadisticas');
    await refreshOtherYears();
    await refreshSecondary();
}

async function refreshOtherYears() {
    const years = await fetchJson('/api/options/years?' + query({ exclude: yearSelect.value }));
    const current = otherYearSelect.value;
    fillSelect(otherYearSelect, years, 'Seleccione otro año',
        years.map(String).includes(current) ? current : null);
}

async function refreshSecondary() {
    const otherMap = document.getElementById('mapa-campeche-otra');
    const otherBars = document.getElementById('grafica-estadisticas-otra');
    if (!comparing || !otherYearSelect.value) {
        otherMap.classList.add('hidden');
        otherBars.classList.add('hidden');
        return;
    }
    const figures = await fetchJson('/api/home/figures?' + query({
        year: otherYearSelect.value,
        crimeType: delitoSelect.value,
    }));
    otherMap.classList.remove('hidden');
    renderFigures(figures, 'mapa-campeche-otra', 'grafica-estadisticas-otra');
}

otherButton.addEventListener('click', () => {
    comparing = !comparing;
    otherYearSelect.classList.toggle('hidden', !comparing);
    refreshSecondary();
});
yearSelect.addEventListener('change', refreshPrimary);
delitoSelect.addEventListener('change', refreshPrimary);
otherYearSelect.addEventListener('change', refreshSecondary);

async function init() {
    const options = await fetchJson('/api/options');
    fillSelect(yearSelect, options.years, 'Seleccione un año', null);
    fillSelect(delitoSelect, options.crimeTypes, 'Seleccione un delito', null);
    await refreshPrimary();
}

init();
";

const ESTADISTICAS_BODY: &str = r#"        <div class="row">
            <div class="col"><select id="bien-juridico-dropdown"></select></div>
            <div class="col"><select id="municipio-dropdown"></select></div>
            <div class="col"><select id="year-dropdown-estadisticas"></select></div>
        </div>
        <div class="row">
            <div class="col"><select id="delitos-dropdown"></select></div>
            <div class="col"><select id="subdelitos-dropdown"></select></div>
        </div>
        <div class="row">
            <div class="col" id="modalidades-container"></div>
        </div>
        <div class="row">
            <div class="col"><div id="estadisticas-grafica"></div></div>
        </div>
        <div class="row">
            <div class="col"><button id="otra-seleccion-btn" class="action-btn">Otra Selección</button></div>
        </div>
        <div class="row">
            <div class="col"><select id="estadisticas-year-dropdown-otra" class="hidden"></select></div>
        </div>
        <div class="row">
            <div class="col"><div id="estadisticas-grafica-otra" class="hidden"></div></div>
        </div>
"#;

const ESTADISTICAS_SCRIPT: &str = r"
const bienSelect = document.getElementById('bien-juridico-dropdown');
const municipioSelect = document.getElementById('municipio-dropdown');
const yearSelect = document.getElementById('year-dropdown-estadisticas');
const delitosSelect = document.getElementById('delitos-dropdown');
const subdelitosSelect = document.getElementById('subdelitos-dropdown');
const modalidadesContainer = document.getElementById('modalidades-container');
const otherYearSelect = document.getElementById('estadisticas-year-dropdown-otra');
const otherButton = document.getElementById('otra-seleccion-btn');
let modalidad = null;
let comparing = false;

function selectionParams(year) {
    return {
        year: year,
        legalCategory: bienSelect.value,
        municipality: municipioSelect.value,
        crimeType: delitosSelect.value,
        crimeSubtype: subdelitosSelect.value,
        modality: modalidad,
    };
}

async function refreshCrimeTypes() {
    const list = await fetchJson('/api/options/crime-types?' + query({
        legalCategory: bienSelect.value,
    }));
    fillSelect(delitosSelect, list.options, 'Seleccione Tipo de Delito', list.selected);
    await refreshSubtypes();
}

async function refreshSubtypes() {
    const list = await fetchJson('/api/options/subtypes?' + query({
        crimeType: delitosSelect.value,
    }));
    fillSelect(subdelitosSelect, list.options, 'Seleccione Subtipo de Delito', list.selected);
    await refreshModalities();
}

async function refreshModalities() {
    modalidad = null;
    const list = await fetchJson('/api/options/modalities?' + query({
        legalCategory: bienSelect.value,
        crimeType: delitosSelect.value,
        crimeSubtype: subdelitosSelect.value,
    }));
    modalidadesContainer.innerHTML = '';
    if (list.options.length === 0) {
        modalidadesContainer.textContent = 'No hay modalidades disponibles.';
    } else {
        for (const value of list.options) {
            const button = document.createElement('button');
            button.className = 'modalidad-btn';
            button.textContent = value;
            button.addEventListener('click', () => {
                modalidad = modalidad === value ? null : value;
                for (const other of modalidadesContainer.children) {
                    other.classList.toggle('active', other.textContent === modalidad);
                }
                refreshFigures();
            });
            modalidadesContainer.appendChild(button);
        }
    }
    await refreshFigures();
}

async function refreshFigures() {
    const figure = await fetchJson('/api/estadisticas/figure?' + query(selectionParams(yearSelect.value)));
    Plotly.react('estadisticas-grafica', figure.data, figure.layout);
    await refreshOtherYears();
    await refreshSecondary();
}

async function refreshOtherYears() {
    const years = await fetchJson('/api/options/years?' + query({ exclude: yearSelect.value }));
    const current = otherYearSelect.value;
    fillSelect(otherYearSelect, years, 'Seleccione otro año',
        years.map(String).includes(current) ? current : null);
}

async function refreshSecondary() {
    const otherGraph = document.getElementById('estadisticas-grafica-otra');
    if (!comparing || !otherYearSelect.value) {
        otherGraph.classList.add('hidden');
        return;
    }
    const figure = await fetchJson('/api/estadisticas/figure?' + query(selectionParams(otherYearSelect.value)));
    otherGraph.classList.remove('hidden');
    Plotly.react(otherGraph, figure.data, figure.layout);
}

otherButton.addEventListener('click', () => {
    comparing = !comparing;
    otherYearSelect.classList.toggle('hidden', !comparing);
    refreshSecondary();
});
bienSelect.addEventListener('change', refreshCrimeTypes);
municipioSelect.addEventListener('change', refreshFigures);
yearSelect.addEventListener('change', refreshFigures);
delitosSelect.addEventListener('change', refreshSubtypes);
subdelitosSelect.addEventListener('change', refreshModalities);
otherYearSelect.addEventListener('change', refreshSecondary);

async function init() {
    const options = await fetchJson('/api/options');
    fillSelect(bienSelect, options.legalCategories, 'Seleccione Bien Jurídico', null);
    const municipios = options.municipalities;
    municipioSelect.innerHTML = '';
    const prompt = document.createElement('option');
    prompt.value = '';
    prompt.textContent = 'Seleccione Municipio';
    municipioSelect.appendChild(prompt);
    for (const value of municipios) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = capitalize(value);
        municipioSelect.appendChild(option);
    }
    fillSelect(yearSelect, options.years, 'Seleccione Año', null);
    await refreshFigures();
}

init();
";
