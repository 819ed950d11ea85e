use sitewire_core::model::{DropdownOutline, PageOutline, PanelOutline, TabOutline};
use sitewire_protocol::{ClassName, Target, selectors};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, NodeList};

pub struct DropdownParts {
    pub root: Element,
    pub toggle: Option<Element>,
    pub options: Vec<Element>,
    pub value: Option<Element>,
}

pub struct CarouselParts {
    pub track: Element,
    pub prev: Element,
    pub next: Element,
}

/// Handles to every element a controller reads or writes, looked up once
/// when the page is mounted.
pub struct Registry {
    pub header: Option<HtmlElement>,
    pub nav_toggle: Option<Element>,
    pub nav: Option<Element>,
    pub nav_links: Vec<Element>,
    pub nav_anchors: Vec<Element>,
    pub sections: Vec<Element>,
    pub tab_buttons: Vec<Element>,
    pub tab_panels: Vec<Element>,
    pub dropdowns: Vec<DropdownParts>,
    pub carousels: Vec<CarouselParts>,
    pub contact_form: Option<HtmlFormElement>,
    pub footer_year: Option<Element>,
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn form_element(form: &HtmlFormElement) -> &Element {
    form.as_ref()
}

fn is_active(el: &Element) -> bool {
    el.class_list().contains(ClassName::Active.as_str())
}

impl Registry {
    pub fn scan(document: &Document) -> Result<Self, JsValue> {
        let nav = document.query_selector(selectors::NAV)?;
        let nav_anchors = match &nav {
            Some(nav) => elements(&nav.query_selector_all(selectors::NAV_ANCHOR)?),
            None => Vec::new(),
        };

        let mut dropdowns = Vec::new();
        for root in elements(&document.query_selector_all(selectors::DROPDOWN)?) {
            dropdowns.push(DropdownParts {
                toggle: root.query_selector(selectors::DROPDOWN_TOGGLE)?,
                options: elements(&root.query_selector_all(selectors::DROPDOWN_OPTION)?),
                value: root.query_selector(selectors::DROPDOWN_VALUE)?,
                root,
            });
        }

        let mut carousels = Vec::new();
        for shell in elements(&document.query_selector_all(selectors::CAROUSEL)?) {
            let track = shell.query_selector(selectors::CAROUSEL_TRACK)?;
            let prev = shell.query_selector(selectors::CAROUSEL_PREV)?;
            let next = shell.query_selector(selectors::CAROUSEL_NEXT)?;
            if let (Some(track), Some(prev), Some(next)) = (track, prev, next) {
                carousels.push(CarouselParts { track, prev, next });
            }
        }

        Ok(Self {
            header: document
                .query_selector(selectors::SITE_HEADER)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            nav_toggle: document.query_selector(selectors::NAV_TOGGLE)?,
            nav,
            nav_links: elements(&document.query_selector_all(selectors::NAV_LINK)?),
            nav_anchors,
            sections: elements(&document.query_selector_all(selectors::SECTION)?),
            tab_buttons: elements(&document.query_selector_all(selectors::TAB_BUTTON)?),
            tab_panels: elements(&document.query_selector_all(selectors::TAB_PANEL)?),
            dropdowns,
            carousels,
            contact_form: document
                .get_element_by_id(selectors::CONTACT_FORM_ID)
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            footer_year: document.get_element_by_id(selectors::FOOTER_YEAR_ID),
        })
    }

    pub fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(|h| f64::from(h.offset_height()))
    }

    /// Describe the discovered structure for the core.
    pub fn outline(&self) -> PageOutline {
        PageOutline {
            header_height: self.header_height(),
            has_nav: self.nav.is_some() && self.nav_toggle.is_some(),
            nav_links: self
                .nav_links
                .iter()
                .map(|a| a.get_attribute("href").unwrap_or_default())
                .collect(),
            sections: self.sections.iter().map(Element::id).collect(),
            tabs: self
                .tab_buttons
                .iter()
                .map(|b| TabOutline {
                    target: b.get_attribute(selectors::TAB_TARGET_ATTR),
                    active: is_active(b),
                })
                .collect(),
            panels: self
                .tab_panels
                .iter()
                .map(|p| PanelOutline {
                    id: p.id(),
                    active: is_active(p),
                })
                .collect(),
            dropdowns: self
                .dropdowns
                .iter()
                .map(|d| DropdownOutline {
                    options: d
                        .options
                        .iter()
                        .map(|o| o.text_content().unwrap_or_default().trim().to_owned())
                        .collect(),
                    chosen: d
                        .options
                        .iter()
                        .position(|o| o.class_list().contains(ClassName::Selected.as_str())),
                })
                .collect(),
            carousels: self.carousels.len(),
            has_contact_form: self.contact_form.is_some(),
            has_footer_year: self.footer_year.is_some(),
        }
    }

    pub fn resolve(&self, target: Target) -> Option<&Element> {
        match target {
            Target::NavPanel => self.nav.as_ref(),
            Target::NavToggle => self.nav_toggle.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::TabButton(i) => self.tab_buttons.get(i),
            Target::TabPanel(i) => self.tab_panels.get(i),
            Target::Dropdown(i) => self.dropdowns.get(i).map(|d| &d.root),
            Target::DropdownToggle(i) => self.dropdowns.get(i)?.toggle.as_ref(),
            Target::DropdownOption { dropdown, option } => {
                self.dropdowns.get(dropdown)?.options.get(option)
            }
            Target::DropdownValue(i) => self.dropdowns.get(i)?.value.as_ref(),
            Target::CarouselTrack(i) => self.carousels.get(i).map(|c| &c.track),
            Target::ContactForm => self.contact_form.as_ref().map(form_element),
            Target::FooterYear => self.footer_year.as_ref(),
        }
    }
}
