use std::path::Path;

use super::descriptor::{Action, MigrationDescriptor, Target};
use super::patterns::TriggerId;
use super::rules::{Passes, RewriteRule};
use crate::store::FileMatcher;

/// Every historical breaking change, ordered by the tool version that shipped
/// it. The driver runs them in this order; later descriptors may assume
/// earlier ones already ran (the namespace rename precedes every rule that
/// searches for the renamed namespace).
pub fn all(root: &Path) -> Vec<MigrationDescriptor> {
    let mut descriptors = vec![
        defaults_config(root),
        website_config(root),
        menu_config(root),
        namespace_dts(root),
        resource_libs(root),
        layout_prerender(root),
        svelte_files(root),
        page_server(root),
        theme_config(root),
        mdsvex_plugins(root),
        svelte_config(root),
        strings_ts(root),
        dotenv(root),
        vite_alias(root),
        tsconfig_path(root),
        package_json(root),
        route_component_markers(root),
        theme_component_markers(root),
    ];
    descriptors.sort_by_key(|descriptor| version_rank(descriptor.introduced_in));
    descriptors
}

/// Numeric rank for `introduced_in` strings, used by the ordering test.
/// Registry versions are plain `major.minor.patch`; anything else ranks last.
pub fn version_rank(version: &str) -> (u64, u64, u64) {
    let mut parts = version.split('.').map(|part| part.parse::<u64>().ok());
    let major = parts.next().flatten().unwrap_or(u64::MAX);
    let minor = parts.next().flatten().unwrap_or(u64::MAX);
    let patch = parts.next().flatten().unwrap_or(u64::MAX);
    (major, minor, patch)
}

//=============================================================================

fn defaults_config(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "defaults-config",
        introduced_in: "0.10.0",
        target: Target::File(root.join("config/defaults.js.ts")),
        triggers: &[TriggerId::SemVersion],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: &[RewriteRule {
                pattern: r"(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)",
                whole_line: true,
                apply: defaults_version_import,
            }],
            passes: Passes::One,
        },
    }
}

fn defaults_version_import(_: &str) -> String {
    "import { sveltup } from '../sveltup.json';\n\nconst sveltupVersion = sveltup.version;"
        .to_string()
}

//=============================================================================

static WEBSITE_CONFIG_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import\s+(?:type\s+)?\{\s*IWebSite\s*\}\s+from",
        whole_line: true,
        apply: namespace_alias_import,
    },
    RewriteRule {
        pattern: r"\bIWebSite\b",
        whole_line: false,
        apply: website_namespace_usage,
    },
    RewriteRule {
        pattern: r#"^\s*keywords:\s*['"]"#,
        whole_line: true,
        apply: keywords_to_array,
    },
    RewriteRule {
        pattern: r"^sitemap:",
        whole_line: true,
        apply: sitemap_moved_note,
    },
    RewriteRule {
        pattern: r"\bwebmaster\b",
        whole_line: false,
        apply: rename_to_creator,
    },
    RewriteRule {
        pattern: r"\bcontactEmail\b",
        whole_line: false,
        apply: rename_to_email,
    },
];

fn website_config(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "website-config",
        introduced_in: "0.10.4",
        target: Target::File(root.join("config/website.js.ts")),
        triggers: &[
            TriggerId::ImportIWebSiteType,
            TriggerId::IWebSiteUsage,
            TriggerId::KeywordsProp,
            TriggerId::SitemapProp,
            TriggerId::WebmasterProp,
            TriggerId::ContactEmailProp,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: WEBSITE_CONFIG_RULES,
            passes: Passes::One,
        },
    }
}

fn namespace_alias_import(_: &str) -> String {
    "import type { Sveltup } from '$sveltup';".to_string()
}

fn website_namespace_usage(_: &str) -> String {
    "Sveltup.WebSite".to_string()
}

/// `keywords: 'a, b, c',` becomes `keywords: ['a', 'b', 'c'],`. Lines whose
/// value is already an array never match the rule's quoted-value pattern.
fn keywords_to_array(line: &str) -> String {
    let Some((key, value)) = line.split_once(':') else {
        return line.to_string();
    };
    let quoted = value.trim().trim_end_matches(',');
    let inner = quoted.trim_matches(|c| c == '\'' || c == '"');
    let items: Vec<String> = inner
        .split(',')
        .map(|item| format!("'{}'", item.trim()))
        .collect();
    format!("{}: [{}],", key, items.join(", "))
}

/// Re-indents the property so the column-0-anchored trigger no longer fires
/// on migrated content.
fn sitemap_moved_note(line: &str) -> String {
    format!(
        "\t/* [sveltup migrate] @IMPORTANT: sitemap moved out of the WebSite type; configure it in sveltup.json. */\n\t{}",
        line
    )
}

fn rename_to_creator(_: &str) -> String {
    "creator".to_string()
}

fn rename_to_email(_: &str) -> String {
    "email".to_string()
}

//=============================================================================

static MENU_CONFIG_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import\s+(?:type\s+)?\{\s*IMenuItem\s*\}\s+from",
        whole_line: true,
        apply: namespace_alias_import,
    },
    RewriteRule {
        pattern: r"\bIMenuItem\b",
        whole_line: false,
        apply: menu_namespace_usage,
    },
];

fn menu_config(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "menu-config",
        introduced_in: "0.10.4",
        target: Target::File(root.join("config/menu.js.ts")),
        triggers: &[TriggerId::ImportIMenuItemType, TriggerId::IMenuItemUsage],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: MENU_CONFIG_RULES,
            passes: Passes::One,
        },
    }
}

fn menu_namespace_usage(_: &str) -> String {
    "Sveltup.MenuItem".to_string()
}

//=============================================================================

const NAMESPACE_DTS_TEMPLATE: &str = r#"/// <reference types="@sveltejs/kit" />

declare namespace Sveltup {
	interface WebSite {
		name: string;
		baseURL: string;
		language: string;
		title: string;
		description: string;
		seoDescription: string;
		favicon: string;
		logo: string;
		creator: string;
		email: string;
		socials: Record<string, string>;
	}

	interface MenuItem {
		identifier: string;
		name: string;
		url: string;
		weight: number;
		external: boolean;
	}

	interface ResourceContent {
		resource: string;
		metadata: ContentMetadata;
		html: string;
	}

	interface ContentMetadata {
		title: string;
		slug: string;
		draft: boolean;
		headings: Array<{ depth: number; value: string }>;
	}
}
"#;

fn namespace_dts(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "namespace-dts",
        introduced_in: "0.10.4",
        target: Target::File(root.join("src/sveltup.d.ts")),
        triggers: &[],
        gatekeeper: None,
        action: Action::Seed {
            marker: "declare namespace Sveltup",
            template: NAMESPACE_DTS_TEMPLATE,
        },
    }
}

//=============================================================================

static RESOURCE_LIBS_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import\s+type\s+\{\s*Sveltup\s*\}\s+from\s+'(?:\.\./)*src/sveltup';",
        whole_line: true,
        apply: namespace_alias_import,
    },
    RewriteRule {
        pattern: r"^import\s+(?:type\s+)?\{\s*IWebSite\s*\}\s+from",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"\bIContentEntry\b",
        whole_line: false,
        apply: resource_content_usage,
    },
    RewriteRule {
        pattern: r"\bIWebSite\b",
        whole_line: false,
        apply: website_namespace_usage,
    },
    RewriteRule {
        pattern: r"\bcapitaliseAll\b",
        whole_line: false,
        apply: capitalize_all_rename,
    },
    RewriteRule {
        pattern: r"\bcapitaliseFirstLetter\b",
        whole_line: false,
        apply: capitalize_first_rename,
    },
    RewriteRule {
        pattern: r"\bcamel2kebab\b",
        whole_line: false,
        apply: camel_to_kebab_rename,
    },
    RewriteRule {
        pattern: r"\bmakeTitle\b",
        whole_line: false,
        apply: to_title_rename,
    },
    RewriteRule {
        pattern: r"\bmakeSlug\b",
        whole_line: false,
        apply: to_slug_rename,
    },
];

fn resource_libs(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "resource-libs",
        introduced_in: "0.10.4",
        target: Target::Dir {
            dir: root.join("src/lib"),
            matcher: FileMatcher::Extension("ts"),
        },
        triggers: &[
            TriggerId::NamespaceRelativeImport,
            TriggerId::ImportIWebSiteType,
            TriggerId::IContentEntryUsage,
            TriggerId::IWebSiteUsage,
            TriggerId::CapitaliseAllLegacy,
            TriggerId::CapitaliseFirstLegacy,
            TriggerId::Camel2KebabLegacy,
            TriggerId::MakeTitleLegacy,
            TriggerId::MakeSlugLegacy,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: RESOURCE_LIBS_RULES,
            // One rule per line per sweep; helper calls nest on one line.
            passes: Passes::Two,
        },
    }
}

fn delete_line(_: &str) -> String {
    String::new()
}

fn resource_content_usage(_: &str) -> String {
    "ResourceContent".to_string()
}

fn capitalize_all_rename(_: &str) -> String {
    "capitalizeAll".to_string()
}

fn capitalize_first_rename(_: &str) -> String {
    "capitalizeFirstLetter".to_string()
}

fn camel_to_kebab_rename(_: &str) -> String {
    "camelToKebabCase".to_string()
}

fn to_title_rename(_: &str) -> String {
    "toTitle".to_string()
}

fn to_slug_rename(_: &str) -> String {
    "toSlug".to_string()
}

//=============================================================================

fn layout_prerender(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "layout-prerender",
        introduced_in: "0.10.8",
        target: Target::File(root.join("src/routes/+layout.ts")),
        triggers: &[TriggerId::PrerenderQuoted],
        gatekeeper: Some("export const trailingSlash"),
        action: Action::Rewrite {
            rules: &[RewriteRule {
                pattern: r#"^export const prerender\s*=\s*['"]"#,
                whole_line: true,
                apply: prerender_boolean,
            }],
            passes: Passes::One,
        },
    }
}

fn prerender_boolean(_: &str) -> String {
    "export const prerender = true;".to_string()
}

//=============================================================================

static SVELTE_FILES_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"\bIWebPageMetadata\b",
        whole_line: false,
        apply: seo_webpage_metadata,
    },
    RewriteRule {
        pattern: r"\bwebsiteData\b",
        whole_line: false,
        apply: jsonld_data_prop,
    },
    RewriteRule {
        pattern: r"\bcurrentTitle\b",
        whole_line: false,
        apply: jsonld_current_prop,
    },
    RewriteRule {
        pattern: r"sveltekit:prefetch",
        whole_line: false,
        apply: preload_data_attr,
    },
];

fn svelte_files(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "svelte-files",
        introduced_in: "0.11.0",
        target: Target::Dir {
            dir: root.join("src/routes"),
            matcher: FileMatcher::Names(&["+layout.svelte", "+page.svelte", "+page.svx"]),
        },
        triggers: &[
            TriggerId::IWebPageMetadataUsage,
            TriggerId::JsonLdWebsiteData,
            TriggerId::JsonLdCurrentTitle,
            TriggerId::SvelteKitPrefetch,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: SVELTE_FILES_RULES,
            // JsonLd usages put websiteData and currentTitle on one line.
            passes: Passes::Two,
        },
    }
}

fn seo_webpage_metadata(_: &str) -> String {
    "SEOWebPageMetadata".to_string()
}

fn jsonld_data_prop(_: &str) -> String {
    "data".to_string()
}

fn jsonld_current_prop(_: &str) -> String {
    "current".to_string()
}

fn preload_data_attr(_: &str) -> String {
    "data-sveltekit-preload-data=\"hover\"".to_string()
}

//=============================================================================

static PAGE_SERVER_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import\s+type\s+\{\s*Sveltup\s*\}\s+from\s+'(?:\.\./)*src/sveltup';",
        whole_line: true,
        apply: namespace_alias_import,
    },
    RewriteRule {
        pattern: r"^import\s+(?:type\s+)?\{\s*IWebSite\s*\}\s+from",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"\bIContentEntry\b",
        whole_line: false,
        apply: resource_content_usage,
    },
    RewriteRule {
        pattern: r"\bIWebSite\b",
        whole_line: false,
        apply: website_namespace_usage,
    },
];

fn page_server(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "page-server",
        introduced_in: "0.11.0",
        target: Target::Dir {
            dir: root.join("src/routes"),
            matcher: FileMatcher::Names(&["+page.server.ts"]),
        },
        triggers: &[
            TriggerId::NamespaceRelativeImport,
            TriggerId::ImportIWebSiteType,
            TriggerId::IContentEntryUsage,
            TriggerId::IWebSiteUsage,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: PAGE_SERVER_RULES,
            passes: Passes::Two,
        },
    }
}

//=============================================================================

static THEME_CONFIG_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^const config\b",
        whole_line: true,
        apply: theme_config_header,
    },
    RewriteRule {
        pattern: r"^export default config\b",
        whole_line: false,
        apply: theme_config_export,
    },
    RewriteRule {
        pattern: r#"^\s*name:\s*['"]"#,
        whole_line: true,
        apply: theme_name_from_settings,
    },
];

fn theme_config(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "theme-config",
        introduced_in: "0.11.3",
        target: Target::Dir {
            dir: root.join("themes"),
            matcher: FileMatcher::Names(&["theme.config.js"]),
        },
        triggers: &[TriggerId::ThemeConfigConst],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: THEME_CONFIG_RULES,
            passes: Passes::One,
        },
    }
}

fn theme_config_header(_: &str) -> String {
    "import { theme } from '../../sveltup.json';\n\nconst themeConfig = {".to_string()
}

fn theme_config_export(_: &str) -> String {
    "export { themeConfig }".to_string()
}

fn theme_name_from_settings(_: &str) -> String {
    "\tname: theme.name,".to_string()
}

//=============================================================================

static MDSVEX_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import remarkHeadings\b",
        whole_line: true,
        apply: headings_import,
    },
    RewriteRule {
        pattern: r"^import remarkExternalLinks\b",
        whole_line: true,
        apply: rehype_external_links_import,
    },
    RewriteRule {
        pattern: r"^import remarkSlug\b",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"\[remarkExternalLinks",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"remarkSlug,?\s*",
        whole_line: false,
        apply: delete_span,
    },
    RewriteRule {
        pattern: r"rehypePlugins:\s*\[rehypeSlug",
        whole_line: true,
        apply: rehype_plugins_block,
    },
];

fn mdsvex_plugins(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "mdsvex-plugins",
        introduced_in: "0.11.7",
        target: Target::File(root.join("mdsvex.config.js")),
        triggers: &[
            TriggerId::RemarkHeadingsImportLegacy,
            TriggerId::RemarkExtLinksImport,
            TriggerId::RemarkExtLinksUsage,
            TriggerId::RemarkSlugImport,
            TriggerId::RemarkSlugUsage,
            TriggerId::RehypePluginsInline,
        ],
        gatekeeper: Some("mdsvex"),
        action: Action::Rewrite {
            rules: MDSVEX_RULES,
            passes: Passes::Two,
        },
    }
}

fn headings_import(_: &str) -> String {
    "import headings from '@sveltup/remark-headings';".to_string()
}

fn rehype_external_links_import(_: &str) -> String {
    "import rehypeExternalLinks from 'rehype-external-links';".to_string()
}

fn delete_span(_: &str) -> String {
    String::new()
}

fn rehype_plugins_block(_: &str) -> String {
    [
        "\trehypePlugins: [",
        "\t\trehypeSlug,",
        "\t\t[rehypeExternalLinks, { target: '_blank', rel: ['noopener', 'noreferrer'] }],",
        "\t\t[rehypeAutoLinkHeadings, { behavior: 'wrap' }]",
        "\t],",
    ]
    .join("\n")
}

//=============================================================================

static SVELTE_CONFIG_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^\s*trailingSlash:",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"^\s*enabled:",
        whole_line: true,
        apply: delete_line,
    },
];

fn svelte_config(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "svelte-config",
        introduced_in: "0.12.0",
        target: Target::File(root.join("svelte.config.js")),
        triggers: &[TriggerId::TrailingSlashProp, TriggerId::PrerenderEnabledProp],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: SVELTE_CONFIG_RULES,
            passes: Passes::One,
        },
    }
}

//=============================================================================

static STRINGS_TS_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^import\s+(?:type\s+)?\{\s*IWebSite\s*\}\s+from",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"\bIContentEntry\b",
        whole_line: false,
        apply: resource_content_usage,
    },
    RewriteRule {
        pattern: r"\bIWebSite\b",
        whole_line: false,
        apply: website_namespace_usage,
    },
];

fn strings_ts(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "strings-ts",
        introduced_in: "0.12.0",
        target: Target::File(root.join("src/lib/utils/strings.ts")),
        triggers: &[
            TriggerId::ImportIWebSiteType,
            TriggerId::IContentEntryUsage,
            TriggerId::IWebSiteUsage,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: STRINGS_TS_RULES,
            passes: Passes::One,
        },
    }
}

//=============================================================================

static DOTENV_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"^SITEMAP_",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"SVELTEKIT_BUILD_FOLDER",
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r"^# The folder where adapter-static",
        whole_line: true,
        apply: delete_line,
    },
];

fn dotenv(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "dotenv",
        introduced_in: "0.12.4",
        target: Target::File(root.join(".env.production")),
        triggers: &[
            TriggerId::SitemapDotenv,
            TriggerId::SvelteKitBuildFolder,
            TriggerId::SvelteKitBuildComment,
        ],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: DOTENV_RULES,
            passes: Passes::One,
        },
    }
}

//=============================================================================

fn vite_alias(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "vite-alias",
        introduced_in: "0.13.0",
        target: Target::File(root.join("vite.config.ts")),
        triggers: &[TriggerId::EmptyViteAlias],
        gatekeeper: Some("resolve:"),
        action: Action::Rewrite {
            rules: &[RewriteRule {
                pattern: r"alias:\s*\{\s*\}",
                whole_line: true,
                apply: vite_alias_block,
            }],
            passes: Passes::One,
        },
    }
}

fn vite_alias_block(_: &str) -> String {
    [
        "\t\talias: {",
        "\t\t\t$sveltup: path.resolve('./src/sveltup')",
        "\t\t},",
    ]
    .join("\n")
}

//=============================================================================

fn tsconfig_path(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "tsconfig-path",
        introduced_in: "0.13.0",
        target: Target::File(root.join("tsconfig.json")),
        triggers: &[TriggerId::EmptyTsPaths],
        gatekeeper: Some("compilerOptions"),
        action: Action::Rewrite {
            rules: &[RewriteRule {
                pattern: r#""paths":\s*\{\s*\}"#,
                whole_line: true,
                apply: tsconfig_paths_block,
            }],
            passes: Passes::One,
        },
    }
}

fn tsconfig_paths_block(_: &str) -> String {
    [
        "\t\t\"paths\": {",
        "\t\t\t\"$sveltup\": [\"./src/sveltup\"]",
        "\t\t},",
    ]
    .join("\n")
}

//=============================================================================

static PACKAGE_JSON_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r#""remark-external-links""#,
        whole_line: true,
        apply: rehype_external_links_dep,
    },
    RewriteRule {
        pattern: r#""remark-slug""#,
        whole_line: true,
        apply: remark_headings_dep,
    },
    RewriteRule {
        pattern: r#""mdast-util-to-string""#,
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r#""unist-util-visit""#,
        whole_line: true,
        apply: delete_line,
    },
    RewriteRule {
        pattern: r#""@sveltup/essentials":\s*"[^"]*""#,
        whole_line: false,
        apply: essentials_bump,
    },
    RewriteRule {
        pattern: r#""@sveltup/widgets":\s*"[^"]*""#,
        whole_line: false,
        apply: widgets_bump,
    },
];

fn package_json(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "package-json",
        introduced_in: "0.13.2",
        target: Target::File(root.join("package.json")),
        triggers: &[TriggerId::RemarkExtLinksDep, TriggerId::RemarkSlugDep],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: PACKAGE_JSON_RULES,
            passes: Passes::One,
        },
    }
}

fn rehype_external_links_dep(_: &str) -> String {
    "    \"rehype-external-links\": \"^2.0.1\",".to_string()
}

fn remark_headings_dep(_: &str) -> String {
    "    \"@sveltup/remark-headings\": \"^1.0.1\",".to_string()
}

fn essentials_bump(_: &str) -> String {
    "\"@sveltup/essentials\": \"^0.6.1\"".to_string()
}

fn widgets_bump(_: &str) -> String {
    "\"@sveltup/widgets\": \"^0.5.2\"".to_string()
}

//=============================================================================

static COMPONENT_MARKER_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r#"from "@sveltup/essentials""#,
        whole_line: true,
        apply: essentials_marker,
    },
    RewriteRule {
        pattern: r#"from "@sveltup/widgets""#,
        whole_line: true,
        apply: widgets_marker,
    },
];

fn route_component_markers(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "route-component-markers",
        introduced_in: "0.13.2",
        target: Target::Dir {
            dir: root.join("src/routes"),
            matcher: FileMatcher::Extension("svelte"),
        },
        triggers: &[TriggerId::EssentialsImportDq, TriggerId::WidgetsImportDq],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: COMPONENT_MARKER_RULES,
            passes: Passes::One,
        },
    }
}

fn theme_component_markers(root: &Path) -> MigrationDescriptor {
    MigrationDescriptor {
        id: "theme-component-markers",
        introduced_in: "0.13.2",
        target: Target::Dir {
            dir: root.join("themes"),
            matcher: FileMatcher::Extension("svelte"),
        },
        triggers: &[TriggerId::EssentialsImportDq, TriggerId::WidgetsImportDq],
        gatekeeper: None,
        action: Action::Rewrite {
            rules: COMPONENT_MARKER_RULES,
            passes: Passes::One,
        },
    }
}

/// Quote normalization doubles as the idempotence guard: migrated imports use
/// single quotes, which the double-quote trigger no longer matches.
fn essentials_marker(line: &str) -> String {
    format!(
        "// [sveltup migrate] @IMPORTANT: component props changed in @sveltup/essentials v0.6; review this usage.\n{}",
        line.replace("\"@sveltup/essentials\"", "'@sveltup/essentials'")
    )
}

fn widgets_marker(line: &str) -> String {
    format!(
        "// [sveltup migrate] @IMPORTANT: component props changed in @sveltup/widgets v0.5; review this usage.\n{}",
        line.replace("\"@sveltup/widgets\"", "'@sveltup/widgets'")
    )
}
