use campaign_planner::extract::categorize_by_type;
use campaign_planner::mock::MockGenerator;
use campaign_planner::parse::{parse_response_staged, ParseStage};
use campaign_planner::wire::{DEFAULT_BUDGET_FIT, DEFAULT_CAMPAIGN_NAME, DEFAULT_CATEGORY_NAME};
use campaign_planner::{
    extract_creator_categories, extract_creators_from_text, extract_list_items, normalize,
    parse_response, CampaignPlan, CampaignRequest, Creator, CreatorCategory,
};

fn run(text: &str) -> CampaignPlan {
    normalize(&parse_response(text))
}

fn assert_conforms(plan: &CampaignPlan) {
    assert!(!plan.campaign_name.trim().is_empty());
    for list in [&plan.video_ideas, &plan.tracking_metrics, &plan.keys_to_success] {
        assert!(list.len() <= 5);
        assert!(list.iter().all(|s| !s.trim().is_empty()));
    }
    for category in &plan.creator_categories {
        assert!(!category.category_name.trim().is_empty());
        assert!(!category.creators.is_empty());
        for c in &category.creators {
            for field in [&c.name, &c.description, &c.channel_url, &c.subscribers, &c.average_views, &c.budget_fit] {
                assert!(!field.trim().is_empty(), "empty field in {c:?}");
            }
        }
    }
}

const PROSE: &str = "Great news! Here's your plan.

Campaign Name: Trail Ready

Video Ideas:
1. Ten mile test run in the new shoes
2. Muddy trail durability challenge
3. Shoe cleaning and care routine

Tracking Metrics:
- Affiliate link clicks
- Code redemptions per creator

Keys to Success:
- Ship shoes two weeks early
- Let runners speak honestly

Recommended Creators:
1. Summit Sam: honest gear review channel
2. Weekend Wanda, daily lifestyle vlog from the mountains
3. Pace Pro (running tips and training guide)
4. Chuckle Runner: funny trail fails
";

#[test]
fn every_input_normalizes_to_a_conformant_plan() {
    let inputs = [
        "",
        "   \n\t  ",
        "@@@ ### $$$ nothing here",
        r#"{"campaignName": "Plain", "videoIdeas": ["one idea here"]}"#,
        "Sure thing:\n```json\n{\"campaignName\": \"Fenced\", \"creatorCategories\": [{\"creators\": [{\"name\": \"Z\"}]}]}\n```",
        "{'campaignName': 'Quoted', 'keysToSuccess': ['be early']}",
        "日本語のテキスト 🎉 — ünïcødé\n• 価格は安いです、品質も良い\n",
        r#"{"campaignName": "", "videoIdeas": "nope", "creatorCategories": [{"categoryName": 5, "creators": [{"name": ""}, 1]}]}"#,
        "{ unbalanced { braces",
        PROSE,
    ];
    for input in inputs {
        assert_conforms(&run(input));
    }
}

#[test]
fn mock_plans_conform() {
    let request = CampaignRequest {
        campaign_goals: "Promote a travel backpack".into(),
        campaign_budget: "over $30,000".into(),
        timeline: "Q3".into(),
        ..CampaignRequest::default()
    };
    for seed in 0..10 {
        assert_conforms(&MockGenerator::new(Some(seed)).generate(&request));
    }
}

#[test]
fn list_extraction_is_deterministic_and_capped() {
    let text = "- first useful item\n- second useful item\n- third useful item\n\
- fourth useful item\n- fifth useful item\n- sixth useful item\n";
    let a = extract_list_items(text, 5);
    let b = extract_list_items(text, 5);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
    assert_eq!(a[0], "first useful item");
}

#[test]
fn repeated_bullet_returned_once() {
    let items = extract_list_items("- Post on launch day\n- Post on launch day\n- Pin a comment", 5);
    assert_eq!(items, vec!["Post on launch day", "Pin a comment"]);
}

#[test]
fn serialized_plan_round_trips() {
    let plan = CampaignPlan {
        campaign_name: "Round Trip".into(),
        video_ideas: vec!["Idea number one".into(), "Idea number two".into()],
        tracking_metrics: vec!["Watch time".into()],
        keys_to_success: vec!["Start early".into()],
        creator_categories: vec![CreatorCategory {
            category_name: "Tech Reviewers".into(),
            creators: vec![Creator {
                name: "Byte Size".into(),
                description: "Short, punchy gadget reviews".into(),
                channel_url: "https://youtube.com/@bytesize".into(),
                subscribers: "1.2M subscribers".into(),
                average_views: "180K".into(),
                budget_fit: "High fit for your budget".into(),
            }],
        }],
    };
    let text = serde_json::to_string(&plan).unwrap();
    let (raw, stage) = parse_response_staged(&text);
    assert_eq!(stage, ParseStage::StrictJson);
    assert_eq!(normalize(&raw), plan);

    let mocked = MockGenerator::new(Some(11)).generate(&CampaignRequest::default());
    assert_eq!(run(&serde_json::to_string_pretty(&mocked).unwrap()), mocked);
}

#[test]
fn single_quotes_are_repaired() {
    let (raw, stage) = parse_response_staged("{'campaignName': 'X', 'videoIdeas': ['a','b']}");
    assert_eq!(stage, ParseStage::RepairedQuotes);
    assert_eq!(raw["campaignName"], "X");
    assert_eq!(normalize(&raw).campaign_name, "X");
}

#[test]
fn legacy_shape_is_converted() {
    let plan = run(r#"{"recommendedCreators": [{"name": "A"}]}"#);
    assert_eq!(plan.creator_categories.len(), 1);
    let category = &plan.creator_categories[0];
    assert_eq!(category.category_name, DEFAULT_CATEGORY_NAME);
    assert_eq!(category.creators.len(), 1);
    assert_eq!(category.creators[0].name, "A");
    assert_eq!(category.creators[0].budget_fit, DEFAULT_BUDGET_FIT);
}

#[test]
fn fallback_grouping_conserves_creators() {
    let creators = extract_creators_from_text(PROSE);
    assert_eq!(creators.len(), 4);

    let grouped = categorize_by_type(creators);
    assert_eq!(grouped.iter().map(|c| c.creators.len()).sum::<usize>(), 4);

    let categories = extract_creator_categories(PROSE);
    assert_eq!(categories.iter().map(|c| c.creators.len()).sum::<usize>(), 4);
    assert!(categories.iter().all(|c| c.category_name.ends_with(" Creators")));
}

#[test]
fn stray_labels_do_not_drop_creators() {
    let inline_label = "Recommended Creators:\n\
1. Glow Lab (Niche: skincare): daily routines\n\
2. Tech Tom: unboxing reviews\n";
    let plan = run(inline_label);
    assert_eq!(plan.total_creators(), 2);
    assert_conforms(&plan);

    let empty_blocks = format!("Category: Trail Running\n\nGroup: Road\n\n{PROSE}");
    let categories = extract_creator_categories(&empty_blocks);
    assert_eq!(categories.iter().map(|c| c.creators.len()).sum::<usize>(), 4);
    assert_eq!(run(&empty_blocks).total_creators(), 4);
}

#[test]
fn prose_response_is_structured() {
    let plan = run(PROSE);
    assert_eq!(plan.campaign_name, "Trail Ready");
    assert_eq!(plan.video_ideas.len(), 3);
    assert_eq!(plan.tracking_metrics, vec!["Affiliate link clicks", "Code redemptions per creator"]);
    assert_eq!(plan.total_creators(), 4);
}

#[test]
fn empty_input_gives_empty_plan() {
    let plan = run("");
    assert_eq!(plan.campaign_name, DEFAULT_CAMPAIGN_NAME);
    assert!(plan.video_ideas.is_empty());
    assert!(plan.tracking_metrics.is_empty());
    assert!(plan.keys_to_success.is_empty());
    assert!(plan.creator_categories.is_empty());
    assert_eq!(plan, CampaignPlan::default());
}
