use regex::Regex;

/// Symbolic names for the regexes that signal "this file still carries a
/// pre-migration spelling". Triggers are OR-matched per descriptor: one hit in
/// one line is enough to schedule the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerId {
    SemVersion,
    ImportIWebSiteType,
    IWebSiteUsage,
    KeywordsProp,
    SitemapProp,
    WebmasterProp,
    ContactEmailProp,
    ImportIMenuItemType,
    IMenuItemUsage,
    NamespaceRelativeImport,
    IContentEntryUsage,
    CapitaliseAllLegacy,
    CapitaliseFirstLegacy,
    Camel2KebabLegacy,
    MakeTitleLegacy,
    MakeSlugLegacy,
    PrerenderQuoted,
    IWebPageMetadataUsage,
    JsonLdWebsiteData,
    JsonLdCurrentTitle,
    SvelteKitPrefetch,
    ThemeConfigConst,
    ThemeConfigExport,
    ThemeNameProp,
    RemarkHeadingsImportLegacy,
    RemarkExtLinksImport,
    RemarkExtLinksUsage,
    RemarkSlugImport,
    RemarkSlugUsage,
    RehypePluginsInline,
    TrailingSlashProp,
    PrerenderEnabledProp,
    SitemapDotenv,
    SvelteKitBuildFolder,
    SvelteKitBuildComment,
    EmptyViteAlias,
    EmptyTsPaths,
    RemarkExtLinksDep,
    RemarkSlugDep,
    MdastUtilToStringDep,
    UnistUtilVisitDep,
    EssentialsImportDq,
    WidgetsImportDq,
}

pub const ALL_TRIGGERS: &[TriggerId] = &[
    TriggerId::SemVersion,
    TriggerId::ImportIWebSiteType,
    TriggerId::IWebSiteUsage,
    TriggerId::KeywordsProp,
    TriggerId::SitemapProp,
    TriggerId::WebmasterProp,
    TriggerId::ContactEmailProp,
    TriggerId::ImportIMenuItemType,
    TriggerId::IMenuItemUsage,
    TriggerId::NamespaceRelativeImport,
    TriggerId::IContentEntryUsage,
    TriggerId::CapitaliseAllLegacy,
    TriggerId::CapitaliseFirstLegacy,
    TriggerId::Camel2KebabLegacy,
    TriggerId::MakeTitleLegacy,
    TriggerId::MakeSlugLegacy,
    TriggerId::PrerenderQuoted,
    TriggerId::IWebPageMetadataUsage,
    TriggerId::JsonLdWebsiteData,
    TriggerId::JsonLdCurrentTitle,
    TriggerId::SvelteKitPrefetch,
    TriggerId::ThemeConfigConst,
    TriggerId::ThemeConfigExport,
    TriggerId::ThemeNameProp,
    TriggerId::RemarkHeadingsImportLegacy,
    TriggerId::RemarkExtLinksImport,
    TriggerId::RemarkExtLinksUsage,
    TriggerId::RemarkSlugImport,
    TriggerId::RemarkSlugUsage,
    TriggerId::RehypePluginsInline,
    TriggerId::TrailingSlashProp,
    TriggerId::PrerenderEnabledProp,
    TriggerId::SitemapDotenv,
    TriggerId::SvelteKitBuildFolder,
    TriggerId::SvelteKitBuildComment,
    TriggerId::EmptyViteAlias,
    TriggerId::EmptyTsPaths,
    TriggerId::RemarkExtLinksDep,
    TriggerId::RemarkSlugDep,
    TriggerId::MdastUtilToStringDep,
    TriggerId::UnistUtilVisitDep,
    TriggerId::EssentialsImportDq,
    TriggerId::WidgetsImportDq,
];

/// Raw pattern for one trigger. Patterns are matched per line, so `^` anchors
/// to the start of the line, not the file.
pub fn pattern(id: TriggerId) -> &'static str {
    match id {
        // semantic versioning regex - https://ihateregex.io/expr/semver/
        TriggerId::SemVersion => {
            r"(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?"
        }
        TriggerId::ImportIWebSiteType => r"^import\s+(?:type\s+)?\{\s*IWebSite\s*\}\s+from",
        TriggerId::IWebSiteUsage => r"\bIWebSite\b",
        TriggerId::KeywordsProp => r#"^\s*keywords:\s*['"]"#,
        TriggerId::SitemapProp => r"^sitemap:",
        TriggerId::WebmasterProp => r"\bwebmaster\b",
        TriggerId::ContactEmailProp => r"\bcontactEmail\b",
        TriggerId::ImportIMenuItemType => r"^import\s+(?:type\s+)?\{\s*IMenuItem\s*\}\s+from",
        TriggerId::IMenuItemUsage => r"\bIMenuItem\b",
        TriggerId::NamespaceRelativeImport => {
            r"^import\s+type\s+\{\s*Sveltup\s*\}\s+from\s+'(?:\.\./)*src/sveltup';"
        }
        TriggerId::IContentEntryUsage => r"\bIContentEntry\b",
        TriggerId::CapitaliseAllLegacy => r"\bcapitaliseAll\b",
        TriggerId::CapitaliseFirstLegacy => r"\bcapitaliseFirstLetter\b",
        TriggerId::Camel2KebabLegacy => r"\bcamel2kebab\b",
        TriggerId::MakeTitleLegacy => r"\bmakeTitle\b",
        TriggerId::MakeSlugLegacy => r"\bmakeSlug\b",
        TriggerId::PrerenderQuoted => r#"^export const prerender\s*=\s*['"]"#,
        TriggerId::IWebPageMetadataUsage => r"\bIWebPageMetadata\b",
        TriggerId::JsonLdWebsiteData => r"\bwebsiteData\b",
        TriggerId::JsonLdCurrentTitle => r"\bcurrentTitle\b",
        TriggerId::SvelteKitPrefetch => r"sveltekit:prefetch",
        TriggerId::ThemeConfigConst => r"^const config\b",
        TriggerId::ThemeConfigExport => r"^export default config\b",
        TriggerId::ThemeNameProp => r#"^\s*name:\s*['"]"#,
        TriggerId::RemarkHeadingsImportLegacy => r"^import remarkHeadings\b",
        TriggerId::RemarkExtLinksImport => r"^import remarkExternalLinks\b",
        TriggerId::RemarkExtLinksUsage => r"\[remarkExternalLinks",
        TriggerId::RemarkSlugImport => r"^import remarkSlug\b",
        TriggerId::RemarkSlugUsage => r"remarkSlug,?\s*",
        TriggerId::RehypePluginsInline => r"rehypePlugins:\s*\[rehypeSlug",
        TriggerId::TrailingSlashProp => r"^\s*trailingSlash:",
        TriggerId::PrerenderEnabledProp => r"^\s*enabled:",
        TriggerId::SitemapDotenv => r"^SITEMAP_",
        TriggerId::SvelteKitBuildFolder => r"SVELTEKIT_BUILD_FOLDER",
        TriggerId::SvelteKitBuildComment => r"^# The folder where adapter-static",
        TriggerId::EmptyViteAlias => r"alias:\s*\{\s*\}",
        TriggerId::EmptyTsPaths => r#""paths":\s*\{\s*\}"#,
        TriggerId::RemarkExtLinksDep => r#""remark-external-links""#,
        TriggerId::RemarkSlugDep => r#""remark-slug""#,
        TriggerId::MdastUtilToStringDep => r#""mdast-util-to-string""#,
        TriggerId::UnistUtilVisitDep => r#""unist-util-visit""#,
        TriggerId::EssentialsImportDq => r#"from "@sveltup/essentials""#,
        TriggerId::WidgetsImportDq => r#"from "@sveltup/widgets""#,
    }
}

/// All trigger regexes, compiled once at startup and shared read-only.
pub struct TriggerCatalog {
    compiled: Vec<(TriggerId, Regex)>,
}

impl TriggerCatalog {
    pub fn new() -> Self {
        let compiled = ALL_TRIGGERS
            .iter()
            .map(|&id| {
                let regex = Regex::new(pattern(id)).expect("trigger pattern should compile");
                (id, regex)
            })
            .collect();
        Self { compiled }
    }

    fn regex(&self, id: TriggerId) -> &Regex {
        self.compiled
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, regex)| regex)
            .expect("every TriggerId is in ALL_TRIGGERS")
    }

    /// True when any trigger matches any line of `content`. Scans
    /// line-by-line and returns on the first hit. An empty trigger list never
    /// applies.
    pub fn requires_migration(&self, content: &str, triggers: &[TriggerId]) -> bool {
        if triggers.is_empty() {
            return false;
        }
        for line in content.split('\n') {
            for &id in triggers {
                if self.regex(id).is_match(line) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for TriggerCatalog {
    fn default() -> Self {
        Self::new()
    }
}
