//! Built-in guides and the driver that lays them out.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::model::{Color, DocumentOptions, Section, SectionKind, TocEntry};
use crate::pdf::Document;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuideKind {
    MainGuide,
    QuickReference,
    PromptLibrary,
}

impl GuideKind {
    pub const ALL: [GuideKind; 3] = [
        GuideKind::MainGuide,
        GuideKind::QuickReference,
        GuideKind::PromptLibrary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GuideKind::MainGuide => "main-guide",
            GuideKind::QuickReference => "quick-reference",
            GuideKind::PromptLibrary => "prompt-library",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            GuideKind::MainGuide => "Professional-Prompting-Guide-v1.pdf",
            GuideKind::QuickReference => "Quick-Reference-Card-v1.pdf",
            GuideKind::PromptLibrary => "Prompt-Library-Collection-v1.pdf",
        }
    }
}

impl FromStr for GuideKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuideKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownGuide(s.to_string()))
    }
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished download: bytes plus what a response needs to serve them.
#[derive(Clone, Debug)]
pub struct GeneratedGuide {
    pub file_name: String,
    pub content_type: &'static str,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

/// Everything needed to lay out one guide, in append order:
/// title, preface sections, optional table of contents, body sections.
#[derive(Clone, Debug, PartialEq)]
pub struct GuidePlan {
    pub title: String,
    pub subtitle: Option<String>,
    pub preface: Vec<Section>,
    pub table_of_contents: bool,
    pub sections: Vec<Section>,
}

impl GuidePlan {
    pub fn for_kind(kind: GuideKind) -> Self {
        match kind {
            GuideKind::MainGuide => main_guide(),
            GuideKind::QuickReference => quick_reference(),
            GuideKind::PromptLibrary => prompt_library(),
        }
    }

    /// Lay the plan out into a fresh document. `toc_pages` supplies the page
    /// number printed for each titled body section, in order.
    /// Returns the document and the page each body section landed on.
    fn lay_out(
        &self,
        options: &DocumentOptions,
        toc_pages: &[u32],
    ) -> Result<(Document, Vec<usize>), Error> {
        let mut doc = Document::new(options.clone())?;
        doc.add_title(&self.title, self.subtitle.as_deref())?;
        for section in &self.preface {
            doc.add_section(section)?;
        }
        if self.table_of_contents {
            let entries: Vec<TocEntry> = self
                .toc_titles()
                .zip(toc_pages.iter().copied().chain(std::iter::repeat(0)))
                .map(|(title, page)| TocEntry::new(title, page))
                .collect();
            doc.add_table_of_contents(&entries)?;
        }
        let mut pages = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            pages.push(doc.add_section(section)?.page);
        }
        Ok((doc, pages))
    }

    fn toc_titles(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .map(|s| s.title.trim())
            .filter(|t| !t.is_empty())
    }

    /// Lay out and write the plan. With a table of contents, a dry run
    /// first records where each section lands so the printed page numbers
    /// match the final layout.
    pub fn render(&self, options: &DocumentOptions) -> Result<(Vec<u8>, usize), Error> {
        let toc_pages: Vec<u32> = if self.table_of_contents {
            let (_, pages) = self.lay_out(options, &[])?;
            self.sections
                .iter()
                .zip(pages)
                .filter(|(s, _)| !s.title.trim().is_empty())
                .map(|(_, page)| page as u32)
                .collect()
        } else {
            Vec::new()
        };

        let (doc, _) = self.lay_out(options, &toc_pages)?;
        let page_count = doc.page_count();
        Ok((doc.generate()?, page_count))
    }
}

/// Build one of the built-in guides. Every call lays out its own documents.
pub fn build_guide(kind: GuideKind, options: &DocumentOptions) -> Result<GeneratedGuide, Error> {
    let (bytes, page_count) = GuidePlan::for_kind(kind).render(options)?;
    Ok(GeneratedGuide {
        file_name: kind.file_name().to_string(),
        content_type: PDF_CONTENT_TYPE,
        page_count,
        bytes,
    })
}

#[derive(Debug, Deserialize)]
struct CustomSection {
    #[serde(default)]
    title: String,
    content: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default)]
    color: Option<String>,
}

fn default_kind() -> String {
    SectionKind::Text.as_str().to_string()
}

/// A guide described in JSON:
/// `{ "title": …, "subtitle": …, "toc": true,
///    "sections": [{ "title", "content", "type", "color" }] }`.
#[derive(Debug, Deserialize)]
pub struct CustomGuide {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    toc: bool,
    #[serde(default)]
    file_name: Option<String>,
    sections: Vec<CustomSection>,
}

impl CustomGuide {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate type tags and colors. Fails on the first bad section.
    pub fn into_plan(self) -> Result<GuidePlan, Error> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("title"));
        }
        let sections = self
            .sections
            .into_iter()
            .map(|s| -> Result<Section, Error> {
                let kind: SectionKind = s.kind.parse()?;
                let mut section = Section::new(kind, s.title, s.content);
                if let Some(hex) = s.color {
                    section = section.with_color(Color::from_hex(&hex)?);
                }
                Ok(section)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GuidePlan {
            title: self.title,
            subtitle: self.subtitle,
            preface: Vec::new(),
            table_of_contents: self.toc,
            sections,
        })
    }

    fn file_name(&self) -> String {
        self.file_name.clone().unwrap_or_else(|| {
            let slug: String = self
                .title
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
                .join("-");
            if slug.is_empty() {
                "guide.pdf".to_string()
            } else {
                format!("{slug}.pdf")
            }
        })
    }
}

pub fn build_custom_guide(
    guide: CustomGuide,
    options: &DocumentOptions,
) -> Result<GeneratedGuide, Error> {
    let file_name = guide.file_name();
    let (bytes, page_count) = guide.into_plan()?.render(options)?;
    Ok(GeneratedGuide {
        file_name,
        content_type: PDF_CONTENT_TYPE,
        page_count,
        bytes,
    })
}

// Content tables.

const AUTHOR: &str = "Eric Keller";
const VIOLET: Color = Color::rgb(0x8B, 0x5C, 0xF6);
const BLUE: Color = Color::rgb(0x25, 0x63, 0xEB);
const GREEN: Color = Color::rgb(0x10, 0xB9, 0x81);
const AMBER: Color = Color::rgb(0xF5, 0x9E, 0x0B);

fn section(kind: SectionKind, title: &str, content: &str) -> Section {
    Section::new(kind, title, content)
}

fn main_guide() -> GuidePlan {
    use SectionKind::*;

    let preface = vec![section(
        Text,
        "",
        &format!(
            "By {AUTHOR}\n\nA comprehensive guide to mastering AI communication for professional results.\n\nPublished 2025 \u{2022} PromptLabBook.com"
        ),
    )];

    let sections = vec![
        section(Text, "Introduction: Why Most AI Interactions Fail", MAIN_INTRO),
        section(Text, "The 5 Pillars of Professional AI Communication", MAIN_PILLARS),
        section(Callout, "Pillar 1: Clarity", PILLAR_CLARITY).with_color(BLUE),
        section(Callout, "Pillar 2: Context", PILLAR_CONTEXT).with_color(GREEN),
        section(Example, "Pillar 3: Examples", PILLAR_EXAMPLES),
        section(Callout, "Pillar 4: Constraints", PILLAR_CONSTRAINTS).with_color(AMBER),
        section(Callout, "Pillar 5: Iteration", PILLAR_ITERATION).with_color(VIOLET),
        section(Code, "The Professional Prompt Formula", PROMPT_FORMULA),
        section(Checklist, "Implementation Roadmap: Your First 30 Days", ROADMAP),
        section(Code, "Professional Templates: Quick Start Guide", QUICK_START_TEMPLATES),
        section(Checklist, "Quality Assurance: Your Professional Checklist", QA_CHECKLIST),
        section(Text, "Next Steps: Building Your AI Communication System", NEXT_STEPS),
    ];

    GuidePlan {
        title: "The Professional's Guide to AI Communication".into(),
        subtitle: Some(
            "Master the 5 Pillars \u{2022} Leverage Professional Templates \u{2022} Execute High-Value Tasks"
                .into(),
        ),
        preface,
        table_of_contents: true,
        sections,
    }
}

fn quick_reference() -> GuidePlan {
    GuidePlan {
        title: "Professional AI Communication - Quick Reference".into(),
        subtitle: None,
        preface: Vec::new(),
        table_of_contents: false,
        sections: vec![
            section(SectionKind::Callout, "The 5 Pillars Framework", QUICK_PILLARS),
            section(SectionKind::Checklist, "Professional Prompting Checklist", QUICK_CHECKLIST),
        ],
    }
}

struct LibraryPrompt {
    title: &'static str,
    difficulty: u8, // 1..=3
    use_case: &'static str,
    template: &'static str,
    customization: &'static str,
}

struct LibraryCategory {
    name: &'static str,
    prompts: &'static [LibraryPrompt],
}

const MAX_DIFFICULTY: u8 = 3;

fn prompt_library() -> GuidePlan {
    let mut sections = Vec::new();
    for category in LIBRARY {
        sections.push(section(
            SectionKind::Text,
            category.name,
            &format!(
                "Professional templates for {} tasks.",
                category.name.to_lowercase()
            ),
        ));
        for prompt in category.prompts {
            sections.push(section(
                SectionKind::Code,
                &format!(
                    "{} (Difficulty: {}/{MAX_DIFFICULTY})",
                    prompt.title,
                    prompt.difficulty.min(MAX_DIFFICULTY)
                ),
                &format!(
                    "Use Case: {}\n\nTemplate:\n{}\n\nCustomization Notes:\n{}",
                    prompt.use_case, prompt.template, prompt.customization
                ),
            ));
        }
    }

    GuidePlan {
        title: "Professional Prompt Library - 25 Copy-Paste Templates".into(),
        subtitle: None,
        preface: Vec::new(),
        table_of_contents: false,
        sections,
    }
}

const MAIN_INTRO: &str = "Most professionals approach AI like they're talking to a search engine. They type in vague requests like \"help me with marketing\" or \"write something about productivity\" and wonder why they get generic, unhelpful responses.

The problem isn't the AI\u{2014}it's the communication.

After working with thousands of professionals and analyzing what separates those who get exceptional AI results from those who struggle, I've identified a clear pattern. The difference comes down to five fundamental principles that transform ordinary prompts into professional-grade instructions.

This guide will teach you those principles and give you the tools to implement them immediately. You'll learn how to communicate with AI like a professional, get consistent results, and save hours of back-and-forth refinement.

By the end of this guide, you'll have:
\u{2022} A systematic approach to crafting effective prompts
\u{2022} 25+ ready-to-use professional templates
\u{2022} A quality checklist to ensure consistent results
\u{2022} The confidence to tackle complex AI-assisted projects

Let's begin.";

const MAIN_PILLARS: &str = "Professional AI communication isn't about knowing the right \"tricks\" or memorizing complex formulas. It's about understanding five fundamental principles that, when applied together, create clear, effective instructions that consistently produce high-quality results.

Think of these as the foundation of every successful AI interaction:";

const PILLAR_CLARITY: &str = "ELIMINATE AMBIGUITY, DEFINE OBJECTIVES

The first pillar is about making your intentions crystal clear. Ambiguous language is the enemy of good AI output.

Instead of: \"Write something about email marketing\"
Try this: \"Write a 300-word blog post about email segmentation strategies for B2B SaaS companies, focusing on behavioral triggers and conversion optimization\"

Key Elements:
\u{2022} Use specific, actionable language
\u{2022} Define technical terms when necessary
\u{2022} State single, clear objectives
\u{2022} Avoid passive voice
\u{2022} Include measurable outcomes when relevant

The clarity test: Could someone unfamiliar with your project understand exactly what you want?";

const PILLAR_CONTEXT: &str = "PROVIDE BACKGROUND, ESTABLISH EXPERTISE

Context transforms generic AI responses into tailored, professional output. This pillar is about setting the stage for success.

Instead of: \"Analyze this data\"
Try this: \"As a data analyst with 5 years of e-commerce experience, analyze this Q3 sales data to identify trends and recommend strategies for Q4 growth in the home goods category\"

Essential Context Elements:
\u{2022} Role/persona establishment (\"As a marketing manager...\")
\u{2022} Industry or domain specifics
\u{2022} Target audience definition
\u{2022} Relevant constraints or limitations
\u{2022} Background information that affects the response

Pro tip: The more specific your context, the more valuable your output becomes.";

const PILLAR_EXAMPLES: &str = "SHOW, DON'T JUST TELL

Examples are the bridge between your vision and AI execution. They demonstrate quality standards and format expectations.

Effective Example Strategy:
\u{2022} Provide 2-3 high-quality examples
\u{2022} Show the exact format you want
\u{2022} Include both good and poor examples when helpful
\u{2022} Demonstrate edge cases or variations
\u{2022} Use examples from your specific domain

Template Structure:
\"Write product descriptions following this format:

Example 1: [Your best product description]
Example 2: [Another strong example]

Now write one for: [Your new product]\"

Remember: Examples set the quality bar for your output.";

const PILLAR_CONSTRAINTS: &str = "SET BOUNDARIES, DEFINE LIMITS

Constraints aren't limitations\u{2014}they're quality controls. They ensure your output meets professional standards and fits your specific needs.

Critical Constraints:
\u{2022} Length specifications (word count, character limits)
\u{2022} Style guidelines (formal, conversational, technical)
\u{2022} Format requirements (bullets, paragraphs, tables)
\u{2022} Quality thresholds (reading level, complexity)
\u{2022} Inclusion/exclusion criteria

Example with Strong Constraints:
\"Write a 150-word executive summary in formal business tone, using bullet points for key findings, with no jargon, suitable for C-level executives who have 30 seconds to review\"

The constraint test: Are your boundaries specific enough to prevent scope creep?";

const PILLAR_ITERATION: &str = "PLAN FOR REFINEMENT, EXPECT IMPROVEMENT

Professional AI communication is rarely a one-shot process. The fifth pillar is about building improvement into your workflow.

Iteration Strategy:
\u{2022} Plan for 2-3 refinement rounds
\u{2022} Define what \"good enough\" looks like
\u{2022} Prepare follow-up questions in advance
\u{2022} Create feedback mechanisms
\u{2022} Document successful patterns for reuse

Iteration Framework:
1. Initial prompt with clear success criteria
2. Review output against objectives
3. Identify specific improvement areas
4. Refine with targeted feedback
5. Test and validate results

Success Metrics to Track:
\u{2022} First-try success rate
\u{2022} Average refinement rounds needed
\u{2022} Time to desired output
\u{2022} Quality satisfaction scores

Remember: The goal isn't perfection on the first try\u{2014}it's consistent improvement toward professional standards.";

const PROMPT_FORMULA: &str = "Now that you understand the five pillars, here's how to combine them into a systematic approach:

[ROLE] + [CONTEXT] + [TASK] + [FORMAT] + [CONSTRAINTS] + [EXAMPLES]

Let's break this down:

ROLE: \"As a marketing expert with 10 years of SaaS experience...\"
CONTEXT: \"...working with remote teams who struggle with productivity tools...\"
TASK: \"...write a LinkedIn post about AI productivity tools...\"
FORMAT: \"...using a conversational tone with 3 actionable tips...\"
CONSTRAINTS: \"...keep it under 150 words and end with an engagement question...\"
EXAMPLES: \"...following the style of this successful post: [example]\"

Result: A complete, professional prompt that consistently produces high-quality output.";

const ROADMAP: &str = "Week 1: Foundation Building
Master the 5 Pillars framework
Practice with 3 different prompt types
Document your most common use cases
Set up your prompt template library

Week 2: Template Development
Create 5 custom templates for your role
Test templates with real projects
Refine based on results
Share successful patterns with your team

Week 3: Advanced Techniques
Experiment with chain-of-thought prompting
Try persona layering for complex tasks
Practice few-shot prompting with examples
Develop feedback loops for iteration

Week 4: System Integration
Build prompt templates into your workflow
Create quality checklists for common tasks
Train team members on best practices
Measure and optimize your success metrics

Success Metrics to Track:
\u{2022} Time saved per AI interaction
\u{2022} Quality improvement scores
\u{2022} First-try success rate
\u{2022} Team adoption and satisfaction";

const QUICK_START_TEMPLATES: &str = "Here are five essential templates to get you started immediately:

1. CONTENT CREATION TEMPLATE
\"As a [ROLE] with [EXPERIENCE] in [INDUSTRY], create [CONTENT TYPE] about [TOPIC] for [AUDIENCE]. Use [TONE], include [SPECIFIC ELEMENTS], and keep it [LENGTH]. Format as [STRUCTURE]. Success criteria: [MEASURABLE OUTCOMES].\"

2. ANALYSIS TEMPLATE
\"As a [ANALYST TYPE], analyze [DATA/CONTENT] to [OBJECTIVE]. Consider [CONTEXT FACTORS], focus on [KEY AREAS], and provide [DELIVERABLE TYPE]. Include actionable recommendations for [STAKEHOLDER]. Present findings in [FORMAT].\"

3. STRATEGY TEMPLATE
\"As a [STRATEGIC ROLE], develop a [STRATEGY TYPE] for [ORGANIZATION/PROJECT] to achieve [GOAL] within [TIMEFRAME]. Consider [CONSTRAINTS], target [AUDIENCE], and include [REQUIRED ELEMENTS]. Provide implementation roadmap with [SPECIFICS].\"

4. COMMUNICATION TEMPLATE
\"As a [COMMUNICATION ROLE], write [MESSAGE TYPE] for [AUDIENCE] about [TOPIC]. Use [TONE], address [KEY CONCERNS], and include [CALL TO ACTION]. Keep it [LENGTH] and optimize for [CHANNEL/MEDIUM].\"

5. PROBLEM-SOLVING TEMPLATE
\"As a [EXPERT TYPE], solve [PROBLEM] for [CONTEXT]. Consider [CONSTRAINTS], evaluate [OPTIONS], and recommend [SOLUTION TYPE]. Provide step-by-step implementation with [SUCCESS METRICS].\"

Customization Tips:
\u{2022} Replace bracketed placeholders with your specifics
\u{2022} Adjust complexity based on your needs
\u{2022} Add industry-specific constraints
\u{2022} Include relevant examples when helpful";

const QA_CHECKLIST: &str = "CLARITY CHECK:
Is the objective crystal clear?
Are technical terms defined?
Would someone unfamiliar understand this?
Is there only one primary objective?

CONTEXT CHECK:
Is the role/persona established?
Is sufficient background provided?
Are constraints clearly stated?
Is the target audience defined?

EXAMPLES CHECK:
Are quality standards demonstrated?
Is the desired format shown?
Are examples relevant and current?
Do examples match the complexity level?

CONSTRAINTS CHECK:
Are length limits specified?
Are style guidelines clear?
Are format requirements stated?
Are quality thresholds defined?

ITERATION CHECK:
Are success criteria defined?
Is feedback mechanism planned?
Are follow-up questions prepared?
Is improvement strategy outlined?

POST-PROMPT REVIEW:
Does output meet objectives?
Are quality standards achieved?
Is format appropriate?
Are next steps clear?";

const NEXT_STEPS: &str = "Congratulations! You now have the foundation for professional AI communication. Here's how to continue building your expertise:

IMMEDIATE ACTIONS:
1. Download the complete Professional Prompting Pack
2. Join our community of AI professionals
3. Start implementing the 5 Pillars in your daily work
4. Track your success metrics and improvement

ONGOING DEVELOPMENT:
\u{2022} Practice with different AI models and platforms
\u{2022} Share successful templates with your team
\u{2022} Contribute to the community knowledge base
\u{2022} Stay updated on AI communication best practices

RESOURCES FOR CONTINUED LEARNING:
\u{2022} Full book: \"The Art of the Prompt\" on Amazon
\u{2022} Community access: PromptLabBook.com/community
\u{2022} Weekly newsletter: Advanced techniques and case studies
\u{2022} Workshop series: Live training and Q&A sessions

Remember: Professional AI communication is a skill that improves with practice. Start with the fundamentals, build your template library, and iterate based on results.

The future belongs to professionals who can effectively collaborate with AI. You now have the tools to be one of them.

Ready to transform your AI interactions? Get the complete toolkit and join thousands of professionals already using these techniques to amplify their work.";

const QUICK_PILLARS: &str = "CLARITY: Eliminate ambiguity, define objectives
CONTEXT: Provide background, establish expertise
EXAMPLES: Show, don't just tell
CONSTRAINTS: Set boundaries, define limits
ITERATION: Plan for refinement, expect improvement

EMERGENCY FORMULA:
[ROLE] + [CONTEXT] + [TASK] + [FORMAT] + [CONSTRAINTS] + [EXAMPLES]

QUALITY CHECK QUESTIONS:
\u{2022} Is this crystal clear to someone unfamiliar?
\u{2022} Do I have enough background information?
\u{2022} Am I showing what I want, not just telling?
\u{2022} Are my boundaries specific enough?
\u{2022} Do I have a plan for improvement?";

const QUICK_CHECKLIST: &str = "PRE-PROMPT PREPARATION:
Clear objective defined
Target audience identified
Desired outcome specified
Success criteria established
Relevant background data collected
Key constraints identified
Examples or references prepared

THE 5 PILLARS VERIFICATION:
Instructions are unambiguous
Background information provided
Few-shot examples included (if applicable)
Length limits specified
Refinement strategy prepared

TECHNICAL OPTIMIZATION:
Logical flow maintained
Key information prioritized
Redundancy eliminated
Readability optimized

POST-PROMPT REVIEW:
Output meets objectives
Quality standards achieved
Format requirements satisfied
Context appropriately applied
Improvement areas identified";

const LIBRARY: &[LibraryCategory] = &[
    LibraryCategory {
        name: "Writing & Content Creation",
        prompts: &[
            LibraryPrompt {
                title: "Blog Post Generator",
                difficulty: 2,
                use_case: "Content Marketing",
                template: "As a content marketing expert with 10 years of experience in [INDUSTRY], write a comprehensive blog post about [TOPIC].

Target audience: [AUDIENCE]
Word count: [NUMBER] words
Tone: [TONE - professional, conversational, authoritative]

Structure:
- Compelling headline with emotional hook
- Introduction that addresses reader pain points
- 3-5 main sections with actionable insights
- Conclusion with clear next steps
- Include relevant statistics and examples

Focus on providing genuine value while subtly positioning [BRAND/PRODUCT] as the solution.",
                customization: "Replace [INDUSTRY], [TOPIC], [AUDIENCE], [NUMBER], [TONE], and [BRAND/PRODUCT] with your specific details.",
            },
            LibraryPrompt {
                title: "Email Campaign Series",
                difficulty: 3,
                use_case: "Email Marketing",
                template: "As an email marketing specialist, create a 5-email nurture sequence for [PRODUCT/SERVICE] targeting [AUDIENCE].

Email 1: Welcome & Value
Email 2: Problem/Solution
Email 3: Social Proof
Email 4: Urgency/Scarcity
Email 5: Clear CTA

Each email should be 150-200 words, mobile-optimized, and include:
- Subject line (under 50 characters)
- Preheader text
- Personalization opportunities
- Clear value proposition
- Single, focused CTA",
                customization: "Specify your product/service and target audience. Adjust email count and word limits as needed.",
            },
        ],
    },
    LibraryCategory {
        name: "Research & Analysis",
        prompts: &[LibraryPrompt {
            title: "Market Research Report",
            difficulty: 3,
            use_case: "Business Strategy",
            template: "As a market research analyst, conduct a comprehensive analysis of [INDUSTRY/MARKET].

Research areas:
- Market size and growth trends
- Key players and competitive landscape
- Customer segments and personas
- Pricing strategies
- Distribution channels
- Emerging opportunities and threats

Provide actionable insights and recommendations for [COMPANY] to capitalize on opportunities and mitigate risks.",
            customization: "Replace [INDUSTRY/MARKET] and [COMPANY] with your specific focus areas.",
        }],
    },
];
