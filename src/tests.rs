mod manual_analyze_problems;
